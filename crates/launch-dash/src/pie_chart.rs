use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Color32, Pos2};
use launch_records::{PieLabel, PieView, SiteSelection};

use crate::palette;

/// Arc segments per quarter turn. A polygon never spans more than a
/// quarter turn, which keeps it convex.
const SEGMENTS_PER_POLYGON: usize = 16;
const ARC_SEGMENT: f32 = FRAC_PI_2 / SEGMENTS_PER_POLYGON as f32;
const SEPARATOR_STROKE: f32 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub count: usize,
    pub fraction: f64,
    pub color: Color32,
}

/// Display data for the pie chart, built from one engine snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub total: usize,
    pub wedges: Vec<Wedge>,
}

impl PieChart {
    pub fn from_view(view: &PieView) -> Self {
        let title = match &view.selection {
            SiteSelection::All => {
                "Total Successful Launches By Site".to_owned()
            }
            SiteSelection::Site(site) => {
                format!("Success vs. Failed Launches for site {site}")
            }
        };
        let total = view.total();

        let wedges = view
            .slices
            .iter()
            .enumerate()
            .map(|(i, slice)| {
                let (label, color) = match &slice.label {
                    PieLabel::Site(site) => {
                        (site.to_string(), palette::site_color(i))
                    }
                    PieLabel::Outcome(outcome) => (
                        palette::outcome_name(*outcome).to_owned(),
                        palette::outcome_color(*outcome),
                    ),
                };
                let fraction = if total == 0 {
                    0.0
                } else {
                    slice.count as f64 / total as f64
                };
                Wedge {
                    label,
                    count: slice.count,
                    fraction,
                    color,
                }
            })
            .collect();

        Self {
            title,
            total,
            wedges,
        }
    }

    /// Wedge under `pos`, with wedges laid out clockwise from 12 o'clock.
    pub fn wedge_at(&self, center: Pos2, radius: f32, pos: Pos2) -> Option<&Wedge> {
        let offset = pos - center;
        if self.total == 0 || offset.length() > radius {
            return None;
        }
        let angle = (offset.y.atan2(offset.x) + FRAC_PI_2).rem_euclid(TAU);
        let mut end = 0.0;
        for wedge in &self.wedges {
            end += wedge.fraction as f32 * TAU;
            if wedge.count > 0 && angle < end {
                return Some(wedge);
            }
        }
        self.wedges.iter().rev().find(|w| w.count > 0)
    }
}

/// Convex polygons covering the wedge from `start` sweeping `sweep`
/// radians clockwise.
pub fn wedge_polygons(
    center: Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
) -> Vec<Vec<Pos2>> {
    if sweep <= 0.0 {
        return Vec::new();
    }
    let steps = (sweep / ARC_SEGMENT).ceil().max(1.0) as usize;
    let arc: Vec<Pos2> = (0..=steps)
        .map(|i| {
            let a = start + sweep * i as f32 / steps as f32;
            center + radius * egui::vec2(a.cos(), a.sin())
        })
        .collect();

    arc.windows(2)
        .collect::<Vec<_>>()
        .chunks(SEGMENTS_PER_POLYGON)
        .map(|chunk| {
            let mut polygon = vec![center, chunk[0][0]];
            polygon.extend(chunk.iter().map(|w| w[1]));
            polygon
        })
        .collect()
}

pub fn show(ui: &mut egui::Ui, chart: &PieChart, diameter: f32) {
    ui.heading(&chart.title);
    ui.horizontal(|ui| {
        let (response, painter) = ui.allocate_painter(
            egui::vec2(diameter, diameter),
            egui::Sense::hover(),
        );
        let center = response.rect.center();
        let radius = diameter * 0.5 - 4.0;

        if chart.total == 0 {
            painter.circle_stroke(
                center,
                radius,
                egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
            );
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                "No successful launches",
                egui::FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );
        }

        let separator =
            egui::Stroke::new(SEPARATOR_STROKE, ui.visuals().extreme_bg_color);
        let visible = chart.wedges.iter().filter(|w| w.count > 0).count();
        let mut start = -FRAC_PI_2;
        for wedge in &chart.wedges {
            let sweep = wedge.fraction as f32 * TAU;
            for polygon in wedge_polygons(center, radius, start, sweep) {
                painter.add(egui::Shape::convex_polygon(
                    polygon,
                    wedge.color,
                    egui::Stroke::NONE,
                ));
            }
            if visible > 1 && wedge.count > 0 {
                let edge = center + radius * egui::vec2(start.cos(), start.sin());
                painter.line_segment([center, edge], separator);
            }
            start += sweep;
        }

        if let Some(pos) = response.hover_pos()
            && let Some(wedge) = chart.wedge_at(center, radius, pos)
        {
            let text = format!(
                "{}: {} ({:.1}%)",
                wedge.label,
                wedge.count,
                wedge.fraction * 100.0
            );
            response.on_hover_text(text);
        }

        ui.vertical(|ui| {
            for wedge in &chart.wedges {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(12.0, 12.0),
                        egui::Sense::hover(),
                    );
                    ui.painter().rect_filled(rect, 2.0, wedge.color);
                    ui.label(format!("{} ({})", wedge.label, wedge.count));
                });
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_records::{Outcome, PieSlice, SiteId};
    use pretty_assertions::assert_eq;

    fn site_view(counts: &[(&str, usize)]) -> PieView {
        PieView {
            selection: SiteSelection::All,
            slices: counts
                .iter()
                .map(|(site, count)| PieSlice {
                    label: PieLabel::Site(SiteId::new(*site)),
                    count: *count,
                })
                .collect(),
        }
    }

    #[test]
    fn all_sites_chart_uses_site_names_and_fractions() {
        let chart = PieChart::from_view(&site_view(&[
            ("CCAFS LC-40", 7),
            ("VAFB SLC-4E", 4),
            ("KSC LC-39A", 10),
            ("CCAFS SLC-40", 3),
        ]));
        assert_eq!(chart.title, "Total Successful Launches By Site");
        assert_eq!(chart.total, 24);
        assert_eq!(chart.wedges[2].label, "KSC LC-39A");
        assert!((chart.wedges[2].fraction - 10.0 / 24.0).abs() < 1e-12);
        let sum: f64 = chart.wedges.iter().map(|w| w.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_site_chart_uses_outcome_names_and_colors() {
        let view = PieView {
            selection: SiteSelection::site("KSC LC-39A"),
            slices: vec![
                PieSlice {
                    label: PieLabel::Outcome(Outcome::Failure),
                    count: 3,
                },
                PieSlice {
                    label: PieLabel::Outcome(Outcome::Success),
                    count: 10,
                },
            ],
        };
        let chart = PieChart::from_view(&view);
        assert_eq!(
            chart.title,
            "Success vs. Failed Launches for site KSC LC-39A"
        );
        let names: Vec<&str> =
            chart.wedges.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(names, vec!["Not Successful", "Successful"]);
        assert_eq!(chart.wedges[0].color, palette::NOT_SUCCESSFUL_COLOR);
        assert_eq!(chart.wedges[1].color, palette::SUCCESSFUL_COLOR);
    }

    #[test]
    fn zero_total_has_zero_fractions() {
        let chart =
            PieChart::from_view(&site_view(&[("A", 0), ("B", 0)]));
        assert_eq!(chart.total, 0);
        assert!(chart.wedges.iter().all(|w| w.fraction == 0.0));
        assert!(
            chart
                .wedge_at(Pos2::ZERO, 10.0, Pos2::new(1.0, 1.0))
                .is_none()
        );
    }

    #[test]
    fn wedge_lookup_goes_clockwise_from_top() {
        let chart = PieChart::from_view(&site_view(&[("A", 1), ("B", 3)]));
        let center = Pos2::new(100.0, 100.0);
        // Just right of 12 o'clock: first quarter belongs to A.
        let a = chart.wedge_at(center, 50.0, Pos2::new(110.0, 60.0));
        assert_eq!(a.map(|w| w.label.as_str()), Some("A"));
        // 6 o'clock is inside B.
        let b = chart.wedge_at(center, 50.0, Pos2::new(100.0, 140.0));
        assert_eq!(b.map(|w| w.label.as_str()), Some("B"));
        // Outside the disc.
        assert!(chart.wedge_at(center, 50.0, Pos2::new(200.0, 100.0)).is_none());
    }

    #[test]
    fn full_circle_splits_into_convex_quarters() {
        let polygons = wedge_polygons(Pos2::ZERO, 10.0, -FRAC_PI_2, TAU);
        assert_eq!(polygons.len(), 4);
        for polygon in &polygons {
            assert_eq!(polygon[0], Pos2::ZERO);
            assert!(polygon.len() >= 3);
        }
        assert!(wedge_polygons(Pos2::ZERO, 10.0, 0.0, 0.0).is_empty());
    }
}
