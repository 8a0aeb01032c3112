//! Exit handling: keep the terminal usable however the process ends.
//!
//! Interactive mode runs prompts in raw mode with the cursor under our
//! control. A signal or `exit()` mid-prompt would otherwise leave the shell
//! without echo.

/// Put the controlling terminal back into cooked mode with echo.
fn restore_cooked_mode() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

extern "C" fn on_exit() {
    restore_cooked_mode();
    const SHOW_CURSOR: &[u8] = b"\x1b[0m\x1b[?25h";
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            libc::write(
                libc::STDOUT_FILENO,
                SHOW_CURSOR.as_ptr() as *const libc::c_void,
                SHOW_CURSOR.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: leave through `exit` so `on_exit` runs.
extern "C" fn on_signal(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Register the exit hook and termination signal handlers, and keep the
/// process out of core dumps so a crash cannot spill a password to disk.
pub fn install_handlers() {
    unsafe {
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);

        libc::atexit(on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, on_signal as *const () as libc::sighandler_t);
        }
    }
}
