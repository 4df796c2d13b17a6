//! A nullable container.
//!
//! `Optional<T>` holds zero or one `T`. It is the one-case sibling of
//! `either::Either`: the case (`Present` / `Empty`) is named at the
//! construction site, the payload exists only in the `Present` case, and
//! accessing it on `Empty` is a precondition violation that fails fast.

pub use Optional::{Empty, Present};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
  Present(T),
  Empty,
}

impl<T> Optional<T> {
  pub fn has_value(&self) -> bool {
    matches!(self, Present(_))
  }

  /// Returns a reference to the payload.
  ///
  /// # Panics
  /// Panics if the value is `Empty`.
  pub fn value(&self) -> &T {
    match self {
      Present(v) => v,
      Empty => panic!("called `Optional::value` on an `Empty` value"),
    }
  }

  /// Returns a mutable reference to the payload.
  ///
  /// # Panics
  /// Panics if the value is `Empty`.
  pub fn value_mut(&mut self) -> &mut T {
    match self {
      Present(v) => v,
      Empty => panic!("called `Optional::value_mut` on an `Empty` value"),
    }
  }

  /// Consumes the container and returns the payload.
  ///
  /// # Panics
  /// Panics if the value is `Empty`.
  pub fn into_value(self) -> T {
    match self {
      Present(v) => v,
      Empty => panic!("called `Optional::into_value` on an `Empty` value"),
    }
  }

  pub fn as_ref(&self) -> Option<&T> {
    match self {
      Present(v) => Some(v),
      Empty => None,
    }
  }

  pub fn as_mut(&mut self) -> Option<&mut T> {
    match self {
      Present(v) => Some(v),
      Empty => None,
    }
  }

  /// Takes the payload out, leaving `Empty` behind.
  pub fn take(&mut self) -> Optional<T> {
    std::mem::replace(self, Empty)
  }

  pub fn into_option(self) -> Option<T> {
    self.into()
  }
}

impl<T> Default for Optional<T> {
  fn default() -> Self {
    Empty
  }
}

impl<T> From<Option<T>> for Optional<T> {
  fn from(v: Option<T>) -> Self {
    match v {
      Some(v) => Present(v),
      None => Empty,
    }
  }
}

impl<T> From<Optional<T>> for Option<T> {
  fn from(v: Optional<T>) -> Self {
    match v {
      Present(v) => Some(v),
      Empty => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use quickcheck_macros::quickcheck;
  use std::cell::Cell;
  use std::rc::Rc;

  struct Counted(Rc<Cell<i32>>);

  impl Counted {
    fn new(count: &Rc<Cell<i32>>) -> Self {
      count.set(count.get() + 1);
      Self(Rc::clone(count))
    }
  }

  impl Drop for Counted {
    fn drop(&mut self) {
      self.0.set(self.0.get() - 1);
    }
  }

  #[test]
  fn test_default_is_empty() {
    let a: Optional<i32> = Optional::default();
    let b = Present(99);

    assert!(!a.has_value());
    assert!(b.has_value());
    assert_eq!(*b.value(), 99);
  }

  #[test]
  #[should_panic(expected = "value")]
  fn test_value_on_empty_panics() {
    let a: Optional<i32> = Empty;
    a.value();
  }

  #[test]
  fn test_mutation_in_place() {
    let mut a = Present(5);
    *a.value_mut() += 1;
    assert_eq!(a, Present(6));
  }

  #[test]
  fn test_non_pod_dropped_exactly_once() {
    let count = Rc::new(Cell::new(0));
    {
      let o = Present(Box::new(Counted::new(&count)));
      assert_eq!(count.get(), 1);
      drop(o);
    }
    assert_eq!(count.get(), 0);
  }

  #[test]
  fn test_take_leaves_empty() {
    let count = Rc::new(Cell::new(0));
    let mut o = Present(Counted::new(&count));

    let taken = o.take();
    assert!(!o.has_value());
    assert!(taken.has_value());
    assert_eq!(count.get(), 1);

    drop(taken);
    assert_eq!(count.get(), 0);
    drop(o);
    assert_eq!(count.get(), 0);
  }

  #[test]
  fn test_assignment_replaces_whole_value() {
    let mut a: Optional<i32> = Empty;
    a = Present(7);
    assert_eq!(a.into_option(), Some(7));
  }

  #[quickcheck]
  fn prop_option_round_trip(v: Option<i32>) -> bool {
    Option::from(Optional::from(v)) == v
  }

  #[quickcheck]
  fn prop_has_value_agrees_with_option(v: Option<i32>) -> bool {
    Optional::from(v).has_value() == v.is_some()
  }
}
