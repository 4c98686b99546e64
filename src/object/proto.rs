//! Prototype-style classes built from explicit delegation.
//!
//! A [`Class`] owns a [`Prototype`]: a shared, mutable table of default members. Prototypes may
//! delegate lookups to another prototype, which is how [`link`] emulates single inheritance. An
//! [`Object`] holds its own fields plus the prototype it was constructed from.
//!
//! Class and prototype handles are reference counted and single-threaded. Linking two classes to
//! each other in both directions creates a reference cycle that is never freed.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use serde_json::Value;

use crate::foundation::error::{ProtomixError, ProtomixResult};

/// Method body. Receives the receiver object and the call arguments.
pub type Method = Rc<dyn Fn(&mut Object, &[Value]) -> ProtomixResult<Value>>;

/// Constructor body run by [`Class::construct`] and [`Class::init_on`].
pub type Initializer = Rc<dyn Fn(&mut Object, &[Value]) -> ProtomixResult<()>>;

/// A member stored on a prototype or as a class static.
#[derive(Clone)]
pub enum Member {
    /// Plain data.
    Value(Value),
    /// Callable member.
    Method(Method),
}

impl Member {
    /// Wrap a closure as a [`Member::Method`].
    pub fn method<F>(f: F) -> Self
    where
        F: Fn(&mut Object, &[Value]) -> ProtomixResult<Value> + 'static,
    {
        Self::Method(Rc::new(f))
    }

    /// The stored value, if this member is plain data.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::Method(_) => None,
        }
    }

    /// Whether this member is callable.
    pub fn is_method(&self) -> bool {
        matches!(self, Self::Method(_))
    }
}

impl From<Value> for Member {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Method(_) => f.write_str("Method(..)"),
        }
    }
}

struct PrototypeInner {
    members: RefCell<BTreeMap<String, Member>>,
    delegate: Option<Prototype>,
    constructor: Weak<ClassInner>,
}

/// Shared template of default members, optionally delegating to a parent prototype.
#[derive(Clone)]
pub struct Prototype(Rc<PrototypeInner>);

impl Prototype {
    fn new(delegate: Option<Prototype>, constructor: Weak<ClassInner>) -> Self {
        Self(Rc::new(PrototypeInner {
            members: RefCell::new(BTreeMap::new()),
            delegate,
            constructor,
        }))
    }

    fn chain(&self) -> impl Iterator<Item = &Prototype> {
        std::iter::successors(Some(self), |p| p.0.delegate.as_ref())
    }

    /// Define or replace an own member. Every object delegating here observes the change.
    pub fn set(&self, key: impl Into<String>, member: impl Into<Member>) {
        self.0.members.borrow_mut().insert(key.into(), member.into());
    }

    /// Define an own method.
    pub fn define_method<F>(&self, key: impl Into<String>, f: F)
    where
        F: Fn(&mut Object, &[Value]) -> ProtomixResult<Value> + 'static,
    {
        self.set(key, Member::method(f));
    }

    /// Own member lookup, without consulting the delegate chain.
    pub fn get_own(&self, key: &str) -> Option<Member> {
        self.0.members.borrow().get(key).cloned()
    }

    /// Resolve `key` here or along the delegate chain.
    pub fn get(&self, key: &str) -> Option<Member> {
        self.chain().find_map(|p| p.get_own(key))
    }

    /// Whether `key` resolves anywhere along the chain.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Names of own members, sorted.
    pub fn own_keys(&self) -> Vec<String> {
        self.0.members.borrow().keys().cloned().collect()
    }

    /// The prototype lookups fall back to.
    pub fn delegate(&self) -> Option<&Prototype> {
        self.0.delegate.as_ref()
    }

    /// The class recorded as this prototype's constructor.
    ///
    /// `None` once every handle to that class has been dropped.
    pub fn constructor(&self) -> Option<Class> {
        self.0.constructor.upgrade().map(Class)
    }

    /// Whether `other` is this prototype or appears anywhere along its delegate chain.
    pub fn derives_from(&self, other: &Prototype) -> bool {
        self.chain().any(|p| p.ptr_eq(other))
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Prototype) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Call the method `key` resolved from this prototype against an explicit receiver.
    ///
    /// This is how a subclass reaches an overridden superclass method:
    /// `class.super_prototype()?.invoke("name", receiver, args)`.
    pub fn invoke(
        &self,
        key: &str,
        receiver: &mut Object,
        args: &[Value],
    ) -> ProtomixResult<Value> {
        match self.get(key) {
            Some(Member::Method(m)) => m(receiver, args),
            Some(Member::Value(_)) => Err(ProtomixError::not_callable(key)),
            None => Err(ProtomixError::missing_member(key)),
        }
    }
}

impl fmt::Debug for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prototype")
            .field("members", &self.own_keys())
            .field("delegate", &self.delegate())
            .finish()
    }
}

struct SuperLink {
    class: Class,
    prototype: Prototype,
}

struct ClassInner {
    name: String,
    init: Option<Initializer>,
    prototype: RefCell<Prototype>,
    statics: RefCell<BTreeMap<String, Member>>,
    superlink: RefCell<Option<SuperLink>>,
}

/// A constructible class value: a name, an optional initializer, a prototype and static members.
///
/// Equality is identity.
#[derive(Clone)]
pub struct Class(Rc<ClassInner>);

impl Class {
    /// Class without an initializer.
    pub fn new(name: impl Into<String>) -> Self {
        Self::build(name.into(), None)
    }

    /// Class whose instances are initialized by `init`.
    pub fn with_init<F>(name: impl Into<String>, init: F) -> Self
    where
        F: Fn(&mut Object, &[Value]) -> ProtomixResult<()> + 'static,
    {
        Self::build(name.into(), Some(Rc::new(init)))
    }

    fn build(name: String, init: Option<Initializer>) -> Self {
        Self(Rc::new_cyclic(|me| ClassInner {
            name,
            init,
            prototype: RefCell::new(Prototype::new(None, me.clone())),
            statics: RefCell::new(BTreeMap::new()),
            superlink: RefCell::new(None),
        }))
    }

    /// Class name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Current prototype.
    pub fn prototype(&self) -> Prototype {
        self.0.prototype.borrow().clone()
    }

    /// Parent prototype captured by [`link`], for explicit superclass method calls.
    pub fn super_prototype(&self) -> Option<Prototype> {
        self.0
            .superlink
            .borrow()
            .as_ref()
            .map(|l| l.prototype.clone())
    }

    /// Parent class captured by [`link`].
    pub fn superclass(&self) -> Option<Class> {
        self.0.superlink.borrow().as_ref().map(|l| l.class.clone())
    }

    /// Define or replace a static member on the class itself.
    pub fn set_static(&self, key: impl Into<String>, member: impl Into<Member>) {
        self.0.statics.borrow_mut().insert(key.into(), member.into());
    }

    /// Look up a static member. Statics are not inherited.
    pub fn get_static(&self, key: &str) -> Option<Member> {
        self.0.statics.borrow().get(key).cloned()
    }

    /// Names of static members, sorted. The superclass accessors are never listed.
    pub fn static_keys(&self) -> Vec<String> {
        self.0.statics.borrow().keys().cloned().collect()
    }

    /// Create an instance from the current prototype and run this class's initializer on it.
    ///
    /// Only this class's initializer runs; a parent initializer runs only if the child forwards
    /// to it through [`Class::init_on`].
    pub fn construct(&self, args: &[Value]) -> ProtomixResult<Object> {
        let mut obj = Object::new(self.prototype());
        self.init_on(&mut obj, args)?;
        Ok(obj)
    }

    /// Run this class's initializer against an existing object. A no-op without an initializer.
    pub fn init_on(&self, obj: &mut Object, args: &[Value]) -> ProtomixResult<()> {
        match &self.0.init {
            Some(init) => init(obj, args),
            None => Ok(()),
        }
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name())
            .field("superclass", &self.superclass().map(|c| c.name().to_owned()))
            .finish_non_exhaustive()
    }
}

/// Make `child` inherit from `parent`.
///
/// `child` gets a fresh prototype that delegates to `parent`'s current prototype and names
/// `child` as its constructor. Members previously defined on `child`'s old prototype are dropped.
/// `parent`'s initializer is not run. Afterwards [`Class::super_prototype`] and
/// [`Class::superclass`] return the parent's prototype and the parent.
pub fn link(child: &Class, parent: &Class) {
    let parent_proto = parent.prototype();
    let proto = Prototype::new(Some(parent_proto.clone()), Rc::downgrade(&child.0));
    *child.0.prototype.borrow_mut() = proto;
    *child.0.superlink.borrow_mut() = Some(SuperLink {
        class: parent.clone(),
        prototype: parent_proto,
    });
    tracing::debug!(child = child.name(), parent = parent.name(), "linked class");
}

/// An instance: own fields plus the prototype it was constructed from.
#[derive(Clone)]
pub struct Object {
    prototype: Prototype,
    fields: BTreeMap<String, Value>,
}

impl Object {
    /// Empty object delegating to `prototype`. No initializer runs.
    pub fn new(prototype: Prototype) -> Self {
        Self {
            prototype,
            fields: BTreeMap::new(),
        }
    }

    /// The prototype this object delegates to.
    pub fn prototype(&self) -> &Prototype {
        &self.prototype
    }

    /// Set an own field, shadowing any prototype member of the same name.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Own field only.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Names of own fields, sorted.
    pub fn own_keys(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    /// Resolve `key` from own fields first, then along the prototype chain.
    pub fn get(&self, key: &str) -> Option<Member> {
        match self.fields.get(key) {
            Some(v) => Some(Member::Value(v.clone())),
            None => self.prototype.get(key),
        }
    }

    /// Call the method `key` with this object as the receiver.
    pub fn call(&mut self, key: &str, args: &[Value]) -> ProtomixResult<Value> {
        match self.get(key) {
            Some(Member::Method(m)) => m(self, args),
            Some(Member::Value(_)) => Err(ProtomixError::not_callable(key)),
            None => Err(ProtomixError::missing_member(key)),
        }
    }

    /// The class recorded as constructor on this object's prototype.
    pub fn constructor(&self) -> Option<Class> {
        self.prototype.constructor()
    }

    /// Constructor identity check: true only for the exact class reported by
    /// [`Object::constructor`].
    pub fn constructed_by(&self, class: &Class) -> bool {
        self.constructor().as_ref() == Some(class)
    }

    /// Prototype-chain check: true when `class`'s current prototype is on this object's chain.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.prototype.derives_from(&class.prototype())
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field(
                "constructor",
                &self.constructor().map(|c| c.name().to_owned()),
            )
            .field("fields", &self.fields)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/proto.rs"]
mod tests;
