use crate::pie_chart::PieChart;
use crate::scatter_chart::ScatterChart;
use crate::store::Store;
use crate::versioned::Memoized;

/// Display data derived from the view snapshots, rebuilt only when the
/// session handed over a new snapshot.
pub struct Cache {
    pub pie_chart: Memoized<Store, u64, PieChart>,
    pub scatter_chart: Memoized<Store, u64, ScatterChart>,
}

impl Cache {
    pub fn new() -> Self {
        let pie_chart = Memoized::new(
            |s: &Store| s.pie.version(),
            |s: &Store| PieChart::from_view(s.pie.get()),
        );

        let scatter_chart = Memoized::new(
            |s: &Store| s.scatter.version(),
            |s: &Store| {
                ScatterChart::from_view(s.scatter.get(), &s.booster_palette)
            },
        );

        Self {
            pie_chart,
            scatter_chart,
        }
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}
