// -------------------------------------------------------------------
// Versioned
// -------------------------------------------------------------------

/// A value whose version is bumped on every replacement, so derived
/// display data can tell whether it is stale.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    version: u64,
    data: T,
}

impl<T> Versioned<T> {
    pub fn new(data: T) -> Self {
        Self { version: 0, data }
    }
    pub fn get(&self) -> &T {
        &self.data
    }
    pub fn set(&mut self, data: T) {
        self.data = data;
        self.version = self.version.wrapping_add(1);
    }
    pub fn version(&self) -> u64 {
        self.version
    }
}

// -------------------------------------------------------------------
// Memoized
// -------------------------------------------------------------------

pub struct Memoized<S, K, V> {
    version: u64,
    last: Option<(K, V)>,
    get_key: Box<dyn Fn(&S) -> K>,
    calc: Box<dyn Fn(&S) -> V>,
}

impl<S, K, V> Memoized<S, K, V>
where
    K: PartialEq,
{
    pub fn new(
        get_key: impl Fn(&S) -> K + 'static,
        calc: impl Fn(&S) -> V + 'static,
    ) -> Self {
        Self {
            version: 0,
            last: None,
            get_key: Box::new(get_key),
            calc: Box::new(calc),
        }
    }

    /// Recompute only if the key changed; return a reference to the cached value.
    pub fn get<'a>(&'a mut self, source: &S) -> &'a V {
        let key = (self.get_key)(source);
        let entry = match self.last.take() {
            Some((last_key, value)) if last_key == key => (last_key, value),
            _ => {
                self.version = self.version.wrapping_add(1);
                (key, (self.calc)(source))
            }
        };
        &self.last.insert(entry).1
    }

    /// Number of recomputations so far.
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn versioned_set_bumps_version() {
        let mut v = Versioned::new(1);
        assert_eq!(v.version(), 0);
        v.set(1);
        v.set(2);
        assert_eq!(v.version(), 2);
        assert_eq!(*v.get(), 2);
    }

    #[test]
    fn memoized_recomputes_only_on_key_change() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut doubled = Memoized::new(
            |s: &Versioned<i32>| s.version(),
            move |s: &Versioned<i32>| {
                counter.set(counter.get() + 1);
                s.get() * 2
            },
        );

        let mut source = Versioned::new(21);
        assert_eq!(*doubled.get(&source), 42);
        assert_eq!(*doubled.get(&source), 42);
        assert_eq!(calls.get(), 1);

        source.set(5);
        assert_eq!(*doubled.get(&source), 10);
        assert_eq!(calls.get(), 2);
        assert_eq!(doubled.version(), 2);
    }
}
