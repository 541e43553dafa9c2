use eframe::egui::{self, Color32};
use egui_plot::{Legend, Plot, PlotPoints, Points};
use launch_records::{PayloadRange, ScatterView, SiteSelection};

use crate::palette::BoosterPalette;

const PLOT_HEIGHT: f32 = 320.0;

/// Points of one booster category, as `[payload_kg, class]` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub booster: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// Display data for the scatter plot, built from one engine snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub range: PayloadRange,
    pub point_count: usize,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Groups points by booster category. Series follow the palette's
    /// dataset order; points keep the view's order within a series.
    pub fn from_view(view: &ScatterView, palette: &BoosterPalette) -> Self {
        let title = match &view.selection {
            SiteSelection::All => {
                "Correlation between Payload and Success for all Sites"
                    .to_owned()
            }
            SiteSelection::Site(site) => format!(
                "Correlation between Payload and Success for Site {site}"
            ),
        };

        let mut series: Vec<(usize, ScatterSeries)> = Vec::new();
        for point in &view.points {
            let xy = [point.payload_kg, f64::from(point.outcome.class())];
            match series
                .iter_mut()
                .find(|(_, s)| s.booster == point.booster.as_str())
            {
                Some((_, s)) => s.points.push(xy),
                None => series.push((
                    palette.rank(&point.booster),
                    ScatterSeries {
                        booster: point.booster.to_string(),
                        color: palette.color(&point.booster),
                        points: vec![xy],
                    },
                )),
            }
        }
        series.sort_by_key(|(rank, _)| *rank);

        Self {
            title,
            range: view.range,
            point_count: view.points.len(),
            series: series.into_iter().map(|(_, s)| s).collect(),
        }
    }
}

pub fn show(ui: &mut egui::Ui, chart: &ScatterChart, point_radius: f32) {
    ui.heading(&chart.title);
    Plot::new("success-payload-scatter-chart")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(chart.range.low)
        .include_x(chart.range.high)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                plot_ui.points(
                    Points::new(
                        series.booster.clone(),
                        PlotPoints::from(series.points.clone()),
                    )
                    .color(series.color)
                    .radius(point_radius)
                    .filled(true),
                );
            }
        });

    let caption = match chart.point_count {
        0 => format!(
            "No launches between {:.0} and {:.0} kg",
            chart.range.low, chart.range.high
        ),
        1 => "1 launch".to_owned(),
        n => format!("{n} launches"),
    };
    ui.label(egui::RichText::new(caption).weak());
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_records::{Dataset, Outcome, Row, compute_scatter};
    use pretty_assertions::assert_eq;

    fn dataset() -> Dataset {
        Dataset::load(vec![
            Row::new("CCAFS LC-40", 500.0, "v1.0", Outcome::Failure),
            Row::new("KSC LC-39A", 2490.0, "FT", Outcome::Success),
            Row::new("CCAFS LC-40", 3170.0, "v1.1", Outcome::Failure),
            Row::new("VAFB SLC-4E", 9600.0, "FT", Outcome::Success),
            Row::new("KSC LC-39A", 5300.0, "v1.0", Outcome::Success),
        ])
        .unwrap()
    }

    #[test]
    fn groups_points_by_booster_in_dataset_order() {
        let dataset = dataset();
        let palette = BoosterPalette::from_dataset(&dataset);
        let view = compute_scatter(
            &dataset,
            &SiteSelection::All,
            dataset.payload_bounds(),
        );
        let chart = ScatterChart::from_view(&view, &palette);

        let boosters: Vec<&str> =
            chart.series.iter().map(|s| s.booster.as_str()).collect();
        assert_eq!(boosters, vec!["v1.0", "FT", "v1.1"]);
        assert_eq!(chart.series[0].points, vec![[500.0, 0.0], [5300.0, 1.0]]);
        assert_eq!(chart.series[1].points, vec![[2490.0, 1.0], [9600.0, 1.0]]);
        assert_eq!(chart.point_count, 5);
        assert_eq!(
            chart.title,
            "Correlation between Payload and Success for all Sites"
        );
    }

    #[test]
    fn booster_color_is_stable_across_filters() {
        let dataset = dataset();
        let palette = BoosterPalette::from_dataset(&dataset);

        let all = ScatterChart::from_view(
            &compute_scatter(
                &dataset,
                &SiteSelection::All,
                dataset.payload_bounds(),
            ),
            &palette,
        );
        let ksc = ScatterChart::from_view(
            &compute_scatter(
                &dataset,
                &SiteSelection::site("KSC LC-39A"),
                dataset.payload_bounds(),
            ),
            &palette,
        );

        let color_of = |chart: &ScatterChart, booster: &str| {
            chart
                .series
                .iter()
                .find(|s| s.booster == booster)
                .map(|s| s.color)
        };
        assert_eq!(color_of(&all, "FT"), color_of(&ksc, "FT"));
        assert_eq!(color_of(&all, "v1.0"), color_of(&ksc, "v1.0"));
        // KSC launched v1.0 after FT, but v1.0 still comes first.
        let boosters: Vec<&str> =
            ksc.series.iter().map(|s| s.booster.as_str()).collect();
        assert_eq!(boosters, vec!["v1.0", "FT"]);
        assert_eq!(
            ksc.title,
            "Correlation between Payload and Success for Site KSC LC-39A"
        );
    }

    #[test]
    fn empty_view_has_no_series() {
        let dataset = dataset();
        let palette = BoosterPalette::from_dataset(&dataset);
        let view = compute_scatter(
            &dataset,
            &SiteSelection::site("VAFB SLC-4E"),
            PayloadRange::new(500.0, 600.0),
        );
        let chart = ScatterChart::from_view(&view, &palette);
        assert!(chart.series.is_empty());
        assert_eq!(chart.point_count, 0);
    }
}
