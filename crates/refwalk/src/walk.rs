//! Depth-first traversal.
//!
//! A [`Walker`] reduces every composite value to its terminal descendants and
//! hands each one to a visit function as a [`Pair`]. Composite values are
//! never visited themselves; their children are reached through the walker's
//! [`Iterate`] implementation.

use std::sync::OnceLock;

use refwalk_reflect::{Reflect, ReflectRef, Value, indirect};
use tracing::{debug, trace};

use crate::{Iter, IterConfig, Iterate, Key, Pair, Result};

/// Performs a full traversal of a value.
///
/// Implementations choose their own visiting order.
pub trait Walker {
    /// Walks `value`, calling `visit` for each terminal value reached.
    ///
    /// Stops at the first error, whether it comes from `visit` or from the
    /// walker itself, and returns it unchanged.
    fn walk(&self, value: &dyn Reflect, visit: &mut dyn FnMut(&Pair<'_>) -> Result<()>)
    -> Result<()>;
}

/// A depth-first, pre-order [`Walker`] backed by an [`Iterate`] implementation.
///
/// Children that are invalid or not observable are skipped along with
/// everything beneath them. For map entries, both the key and the value must
/// be observable.
#[derive(Debug, Clone, Default)]
pub struct DfsWalker<I> {
    iter: I,
}

impl<I: Iterate> DfsWalker<I> {
    /// Creates a new walker over `iter`.
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Returns the iterator used to enumerate children.
    pub fn iterator(&self) -> &I {
        &self.iter
    }

    /// Walks `value` with a generic visit function.
    pub fn walk_with<F>(&self, value: &dyn Reflect, mut visit: F) -> Result<()>
    where
        F: FnMut(&Pair<'_>) -> Result<()>,
    {
        let root = Pair::root(value);
        let mut visits = 0_usize;
        debug!("Walking {}", value.type_name());

        let result = self.walk_pair(&root, &mut |pair: &Pair<'_>| {
            visits += 1;
            visit(pair)
        });

        match &result {
            Ok(()) => debug!("Walk finished after {} visits", visits),
            Err(e) => debug!("Walk stopped after {} visits: {}", visits, e),
        }
        result
    }

    fn walk_pair<F>(&self, pair: &Pair<'_>, visit: &mut F) -> Result<()>
    where
        F: FnMut(&Pair<'_>) -> Result<()> + ?Sized,
    {
        let Some(value) = pair.val() else {
            return visit(pair);
        };
        let value = indirect(value);

        match value.reflect() {
            ReflectRef::Sequence(_) => self.iter.iter_seq(value, &mut |index, child| {
                self.descend(pair, Key::Index(index), child, visit)
            }),
            ReflectRef::Map(_) => self.iter.iter_map(value, &mut |key, child| {
                if !key.can_observe() {
                    return Ok(());
                }
                self.descend(pair, Key::Entry(key), child, visit)
            }),
            ReflectRef::Record(_) => self.iter.iter_record(value, &mut |field, child| {
                self.descend(pair, Key::Field(field), child, visit)
            }),
            ReflectRef::Channel(_) => self.iter.iter_chan(value, &mut |seq, child| {
                self.descend(pair, Key::Index(seq), child, visit)
            }),
            ReflectRef::Pointer(_) | ReflectRef::Scalar(_) | ReflectRef::Opaque => visit(pair),
        }
    }

    fn descend<F>(&self, parent: &Pair<'_>, key: Key<'_>, child: Value<'_>, visit: &mut F) -> Result<()>
    where
        F: FnMut(&Pair<'_>) -> Result<()> + ?Sized,
    {
        if !child.can_observe() {
            trace!("Skipping unobservable child at {}", key);
            return Ok(());
        }

        let pair = Pair::new(Some(parent), Some(key), child, None);
        trace!("Descending into {}", pair);
        self.walk_pair(&pair, visit)
    }
}

impl<I: Iterate> Walker for DfsWalker<I> {
    fn walk(
        &self,
        value: &dyn Reflect,
        visit: &mut dyn FnMut(&Pair<'_>) -> Result<()>,
    ) -> Result<()> {
        self.walk_with(value, visit)
    }
}

static DEFAULT_WALKER: OnceLock<DfsWalker<Iter>> = OnceLock::new();

/// Returns the process-wide walker used by [`walk`].
///
/// It uses an [`Iter`] with the default [`IterConfig`], so channels are
/// never received from.
pub fn default_walker() -> &'static DfsWalker<Iter> {
    DEFAULT_WALKER.get_or_init(|| DfsWalker::new(Iter::new(IterConfig::default())))
}

/// Walks `value` depth-first with the default walker, calling `visit` for
/// each terminal value.
///
/// Values that refer back to their own ancestors through observable members
/// are walked until the stack overflows; no identity tracking is done.
///
/// # Example
///
/// ```rust
/// use refwalk::walk;
///
/// let mut total = 0;
/// walk(&vec![vec![1, 2], vec![3]], |pair| {
///     total += pair.depth();
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(total, 6);
/// ```
pub fn walk<F>(value: &dyn Reflect, visit: F) -> Result<()>
where
    F: FnMut(&Pair<'_>) -> Result<()>,
{
    default_walker().walk_with(value, visit)
}
