//! Subscriber list a model can forward its change notifications to.
//!
//! # Invariants
//!
//! 1. Subscribers are notified in registration order.
//! 2. A subscriber removed with [`PropertyChangedHub::unsubscribe`] is never
//!    called again.
//! 3. Subscribers run synchronously inside the setter that changed the value.

use derive_more::{Display, From};

use crate::errors::{BindableError, BindableResult};
use crate::traits::ReactiveModel;

type Subscriber = Box<dyn FnMut(&'static str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
#[display("subscription#{_0}")]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct PropertyChangedHub {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Option<&'static str>, Subscriber)>,
}

impl std::fmt::Debug for PropertyChangedHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyChangedHub")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl PropertyChangedHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every property change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&'static str) + 'static) -> SubscriptionId {
        self.insert(None, Box::new(subscriber))
    }

    /// Subscribe to changes of one property of model `M`.
    pub fn subscribe_to<M: ReactiveModel>(
        &mut self,
        property: &str,
        subscriber: impl FnMut(&'static str) + 'static,
    ) -> BindableResult<SubscriptionId> {
        let Some(property) = M::PROPERTY_NAMES.iter().copied().find(|p| *p == property) else {
            return Err(BindableError::UnknownProperty {
                model: std::any::type_name::<M>(),
                property: property.to_string(),
            });
        };
        Ok(self.insert(Some(property), Box::new(subscriber)))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _, _)| *existing != id);
        before != self.subscribers.len()
    }

    pub fn notify(&mut self, property: &'static str) {
        log::trace!("property changed: {property}");
        for (_, filter, subscriber) in self.subscribers.iter_mut() {
            if filter.is_none_or(|wanted| wanted == property) {
                subscriber(property);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    fn insert(&mut self, filter: Option<&'static str>, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId::from(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, filter, subscriber));
        id
    }
}
