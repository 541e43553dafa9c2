use eframe::egui::Color32;
use launch_records::{BoosterCategory, Dataset, Outcome};

pub const NOT_SUCCESSFUL_COLOR: Color32 = Color32::from_rgb(0xFF, 0x63, 0x47);
pub const SUCCESSFUL_COLOR: Color32 = Color32::from_rgb(0x32, 0xCD, 0x32);
const UNKNOWN_BOOSTER_COLOR: Color32 = Color32::GRAY;

fn to_color32(c: colorous::Color) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

pub fn outcome_color(outcome: Outcome) -> Color32 {
    match outcome {
        Outcome::Failure => NOT_SUCCESSFUL_COLOR,
        Outcome::Success => SUCCESSFUL_COLOR,
    }
}

pub fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Failure => "Not Successful",
        Outcome::Success => "Successful",
    }
}

/// Qualitative color for the `index`-th site slice.
pub fn site_color(index: usize) -> Color32 {
    let palette = &colorous::TABLEAU10;
    to_color32(palette[index % palette.len()])
}

/// Booster categories mapped to colors in first-seen dataset order, so a
/// category keeps its color whatever the current filter is.
#[derive(Debug, Clone, Default)]
pub struct BoosterPalette {
    entries: Vec<(BoosterCategory, Color32)>,
}

impl BoosterPalette {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let palette = &colorous::CATEGORY10;
        let mut entries: Vec<(BoosterCategory, Color32)> = Vec::new();
        for row in dataset.rows() {
            if entries.iter().any(|(b, _)| *b == row.booster) {
                continue;
            }
            let color = to_color32(palette[entries.len() % palette.len()]);
            entries.push((row.booster.clone(), color));
        }
        Self { entries }
    }

    pub fn color(&self, booster: &BoosterCategory) -> Color32 {
        self.entries
            .iter()
            .find(|(b, _)| b == booster)
            .map(|(_, c)| *c)
            .unwrap_or(UNKNOWN_BOOSTER_COLOR)
    }

    /// Position of `booster` in dataset order.
    pub fn rank(&self, booster: &BoosterCategory) -> usize {
        self.entries
            .iter()
            .position(|(b, _)| b == booster)
            .unwrap_or(self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_records::Row;

    #[test]
    fn booster_colors_follow_first_seen_order() {
        let dataset = Dataset::load(vec![
            Row::new("A", 1.0, "FT", Outcome::Success),
            Row::new("A", 2.0, "v1.0", Outcome::Failure),
            Row::new("B", 3.0, "FT", Outcome::Success),
        ])
        .unwrap();
        let palette = BoosterPalette::from_dataset(&dataset);

        let ft = BoosterCategory::new("FT");
        let v10 = BoosterCategory::new("v1.0");
        assert_eq!(palette.rank(&ft), 0);
        assert_eq!(palette.rank(&v10), 1);
        assert_eq!(palette.color(&ft), to_color32(colorous::CATEGORY10[0]));
        assert_ne!(palette.color(&ft), palette.color(&v10));
        assert_eq!(
            palette.color(&BoosterCategory::new("B5")),
            UNKNOWN_BOOSTER_COLOR
        );
    }

    #[test]
    fn site_colors_cycle() {
        assert_eq!(site_color(0), site_color(10));
        assert_ne!(site_color(0), site_color(1));
    }
}
