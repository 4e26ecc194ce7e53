use serde::{Deserialize, Serialize};

/// Named font-size tiers for a skin.
///
/// Each family (display, headline, title, label, body) has a large, medium
/// and small size. Sizes are conventionally ordered large > medium > small
/// within a family; [TypographyScale::is_well_ordered] checks that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyScale {
    /// Largest display text.
    pub display_large: f64,
    /// Medium display text.
    pub display_medium: f64,
    /// Small display text.
    pub display_small: f64,
    /// Large headlines.
    pub headline_large: f64,
    /// Medium headlines.
    pub headline_medium: f64,
    /// Small headlines.
    pub headline_small: f64,
    /// Large titles.
    pub title_large: f64,
    /// Medium titles.
    pub title_medium: f64,
    /// Small titles.
    pub title_small: f64,
    /// Large labels.
    pub label_large: f64,
    /// Medium labels.
    pub label_medium: f64,
    /// Small labels.
    pub label_small: f64,
    /// Large body text.
    pub body_large: f64,
    /// Medium body text.
    pub body_medium: f64,
    /// Small body text.
    pub body_small: f64,
}

impl TypographyScale {
    /// Create a scale with the standard tier sizes.
    pub const fn new() -> Self {
        Self {
            display_large: 57.0,
            display_medium: 45.0,
            display_small: 36.0,
            headline_large: 32.0,
            headline_medium: 28.0,
            headline_small: 24.0,
            title_large: 22.0,
            title_medium: 16.0,
            title_small: 14.0,
            label_large: 14.0,
            label_medium: 12.0,
            label_small: 11.0,
            body_large: 16.0,
            body_medium: 14.0,
            body_small: 12.0,
        }
    }

    /// Multiply every tier by `factor`.
    pub fn apply_scale(&mut self, factor: f64) {
        for size in self.tiers_mut() {
            *size *= factor;
        }
    }

    /// Return a copy with every tier multiplied by `factor`.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.apply_scale(factor);
        self
    }

    /// Restore the standard tier sizes.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether display, headline, title and body tiers shrink from large to small.
    ///
    /// Label tiers are not checked.
    pub fn is_well_ordered(&self) -> bool {
        self.display_large > self.display_medium
            && self.display_medium > self.display_small
            && self.headline_large > self.headline_medium
            && self.headline_medium > self.headline_small
            && self.title_large > self.title_medium
            && self.title_medium > self.title_small
            && self.body_large > self.body_medium
            && self.body_medium > self.body_small
    }

    /// All tiers, largest family first.
    pub fn tiers(&self) -> [f64; 15] {
        [
            self.display_large,
            self.display_medium,
            self.display_small,
            self.headline_large,
            self.headline_medium,
            self.headline_small,
            self.title_large,
            self.title_medium,
            self.title_small,
            self.label_large,
            self.label_medium,
            self.label_small,
            self.body_large,
            self.body_medium,
            self.body_small,
        ]
    }

    fn tiers_mut(&mut self) -> [&mut f64; 15] {
        [
            &mut self.display_large,
            &mut self.display_medium,
            &mut self.display_small,
            &mut self.headline_large,
            &mut self.headline_medium,
            &mut self.headline_small,
            &mut self.title_large,
            &mut self.title_medium,
            &mut self.title_small,
            &mut self.label_large,
            &mut self.label_medium,
            &mut self.label_small,
            &mut self.body_large,
            &mut self.body_medium,
            &mut self.body_small,
        ]
    }
}

impl Default for TypographyScale {
    fn default() -> Self {
        Self::new()
    }
}
