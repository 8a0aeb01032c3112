//! Password generation settings.

mod file;

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use passgen::{Category, GenerationRequest, Selection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pass_length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub special: bool,
    pub avoid_ambiguous: bool,
    pub to_clipboard: bool,
    pub output_file_path: Option<PathBuf>,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        file::load(&file::path())
    }

    pub fn save_to_file(&self) -> Result<PathBuf> {
        let path = file::path();
        file::save(self, &path)?;
        Ok(path)
    }

    pub fn category_enabled(&self, category: Category) -> bool {
        match category {
            Category::Uppercase => self.uppercase,
            Category::Lowercase => self.lowercase,
            Category::Digit => self.digits,
            Category::Symbol => self.special,
        }
    }

    pub fn set_category(&mut self, category: Category, enabled: bool) {
        let flag = match category {
            Category::Uppercase => &mut self.uppercase,
            Category::Lowercase => &mut self.lowercase,
            Category::Digit => &mut self.digits,
            Category::Symbol => &mut self.special,
        };
        *flag = enabled;
    }

    pub fn selection(&self) -> Selection {
        Category::ALL
            .into_iter()
            .filter(|&c| self.category_enabled(c))
            .collect::<Selection>()
            .avoid_ambiguous(self.avoid_ambiguous)
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.pass_length, self.selection())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            special: true,
            avoid_ambiguous: false,
            to_clipboard: false,
            output_file_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_everything() {
        let request = Settings::default().request();
        assert_eq!(request.length, 16);
        assert_eq!(request.selection, Selection::all());
    }

    #[test]
    fn toggles_map_to_selection() {
        let mut settings = Settings::default();
        settings.set_category(Category::Symbol, false);
        settings.set_category(Category::Uppercase, false);
        settings.avoid_ambiguous = true;

        let selection = settings.selection();
        assert_eq!(
            selection.categories().collect::<Vec<_>>(),
            vec![Category::Lowercase, Category::Digit]
        );
        assert!(selection.avoids_ambiguous());
        assert!(!settings.category_enabled(Category::Symbol));
    }
}
