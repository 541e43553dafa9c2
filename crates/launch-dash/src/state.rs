use crate::actions::{self, Action};
use crate::cache::Cache;
use crate::effects::{self, Effect};
use crate::pie_chart::PieChart;
use crate::scatter_chart::ScatterChart;
use crate::store::Store;

pub struct State {
    pub store: Store,
    pub cache: Cache,
    action_queue: Vec<Action>,
    effect_queue: Vec<Effect>,
}

impl State {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            cache: Cache::new(),
            action_queue: Vec::new(),
            effect_queue: Vec::new(),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        self.action_queue.push(action);
    }

    pub fn has_pending(&self) -> bool {
        !self.action_queue.is_empty() || !self.effect_queue.is_empty()
    }

    /// Actions run one at a time, each to completion, in dispatch order.
    pub fn flush_actions(&mut self) {
        let actions = std::mem::take(&mut self.action_queue);
        for action in actions {
            tracing::trace!(?action, "applying action");
            let mut effects = actions::update(&mut self.store, action);
            self.effect_queue.append(&mut effects);
        }
    }

    pub fn flush_effects(&mut self) {
        let effects = std::mem::take(&mut self.effect_queue);
        for effect in effects {
            effects::run(&mut self.store, effect);
        }
    }

    /// The store together with up-to-date display data for both charts.
    pub fn charts(&mut self) -> (&Store, &PieChart, &ScatterChart) {
        let pie = self.cache.pie_chart.get(&self.store);
        let scatter = self.cache.scatter_chart.get(&self.store);
        (&self.store, pie, scatter)
    }
}
