//! Properties and events, and the accessor methods bound to them.
//!
//! Accessor slots are filled once while the `MethodSemantics` of a type are resolved and may
//! stay unset, e.g. for a read-only property. Additional `other` accessors are kept in
//! declaration order.

use std::sync::{Arc, OnceLock};

use crate::metadata::{method::MethodRc, signatures::TypeSignature};

/// A reference to a `Property`
pub type PropertyRc = Arc<Property>;
/// A vector that holds a list of `Property`
pub type PropertyList = Arc<boxcar::Vec<PropertyRc>>;
/// A reference to an `Event`
pub type EventRc = Arc<Event>;
/// A vector that holds a list of `Event`
pub type EventList = Arc<boxcar::Vec<EventRc>>;
/// A vector that holds the auxiliary accessors of a property or event
pub type AccessorList = Arc<boxcar::Vec<MethodRc>>;

/// A property of a type
pub struct Property {
    /// The name of this property
    pub name: String,
    /// The type of this property
    pub signature: TypeSignature,
    /// The `Method` that retrieves this property
    pub fn_getter: OnceLock<MethodRc>,
    /// The `Method` that sets this property
    pub fn_setter: OnceLock<MethodRc>,
    /// 'Other' associated methods of this property
    pub fn_other: AccessorList,
}

impl Property {
    /// Creates a property with all accessor slots unset
    pub fn new(name: impl Into<String>, signature: TypeSignature) -> Self {
        Property {
            name: name.into(),
            signature,
            fn_getter: OnceLock::new(),
            fn_setter: OnceLock::new(),
            fn_other: Arc::new(boxcar::Vec::new()),
        }
    }
}

/// An event of a type
pub struct Event {
    /// The name of the event
    pub name: String,
    /// The delegate type of the event
    pub event_type: TypeSignature,
    /// The `Method` that triggers '`OnAdd`'
    pub fn_on_add: OnceLock<MethodRc>,
    /// The `Method` that triggers '`OnRemove`'
    pub fn_on_remove: OnceLock<MethodRc>,
    /// The `Method` that triggers '`OnRaise`'
    pub fn_on_raise: OnceLock<MethodRc>,
    /// 'Other' associated methods of this event
    pub fn_other: AccessorList,
}

impl Event {
    /// Creates an event with all accessor slots unset
    pub fn new(name: impl Into<String>, event_type: TypeSignature) -> Self {
        Event {
            name: name.into(),
            event_type,
            fn_on_add: OnceLock::new(),
            fn_on_remove: OnceLock::new(),
            fn_on_raise: OnceLock::new(),
            fn_other: Arc::new(boxcar::Vec::new()),
        }
    }
}
