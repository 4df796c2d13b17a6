//! A two-case sum type.
//!
//! `Either<L, R>` owns exactly one value, of type `L` or type `R`, for its
//! whole lifetime. The case is named at the construction site (`Left` /
//! `Right`), so `Either<T, T>` is constructible without ambiguity, and every
//! extraction routes through `match`, so reading the payload as the wrong
//! type is unrepresentable.

pub use Either::{Left, Right};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
  Left(L),
  Right(R),
}

impl<L, R> Either<L, R> {
  pub fn is_left(&self) -> bool {
    matches!(self, Left(_))
  }

  pub fn is_right(&self) -> bool {
    !self.is_left()
  }

  /// Applies exactly one of the two handlers, chosen by the live case, and
  /// returns its result.
  pub fn either<T, LF, RF>(self, left: LF, right: RF) -> T
  where
    LF: FnOnce(L) -> T,
    RF: FnOnce(R) -> T,
  {
    match self {
      Left(l) => left(l),
      Right(r) => right(r),
    }
  }

  pub fn as_ref(&self) -> Either<&L, &R> {
    match self {
      Left(l) => Left(l),
      Right(r) => Right(r),
    }
  }

  pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
    match self {
      Left(l) => Left(l),
      Right(r) => Right(r),
    }
  }

  pub fn left(self) -> Option<L> {
    match self {
      Left(l) => Some(l),
      Right(_) => None,
    }
  }

  pub fn right(self) -> Option<R> {
    match self {
      Left(_) => None,
      Right(r) => Some(r),
    }
  }

  /// Returns the left payload.
  ///
  /// # Panics
  /// Panics if the value is `Right`.
  pub fn unwrap_left(self) -> L {
    match self {
      Left(l) => l,
      Right(_) => panic!("called `Either::unwrap_left` on a `Right` value"),
    }
  }

  /// Returns the right payload.
  ///
  /// # Panics
  /// Panics if the value is `Left`.
  pub fn unwrap_right(self) -> R {
    match self {
      Left(_) => panic!("called `Either::unwrap_right` on a `Left` value"),
      Right(r) => r,
    }
  }

  /// Returns the left payload without checking the case.
  ///
  /// # Safety
  /// The value must be `Left`. Calling this on a `Right` value is undefined
  /// behavior.
  pub unsafe fn left_unchecked(self) -> L {
    match self {
      Left(l) => l,
      Right(_) => std::hint::unreachable_unchecked(),
    }
  }

  /// Returns the right payload without checking the case.
  ///
  /// # Safety
  /// The value must be `Right`. Calling this on a `Left` value is undefined
  /// behavior.
  pub unsafe fn right_unchecked(self) -> R {
    match self {
      Left(_) => std::hint::unreachable_unchecked(),
      Right(r) => r,
    }
  }

  pub fn map_left<T, F>(self, f: F) -> Either<T, R>
  where
    F: FnOnce(L) -> T,
  {
    match self {
      Left(l) => Left(f(l)),
      Right(r) => Right(r),
    }
  }

  pub fn map_right<T, F>(self, f: F) -> Either<L, T>
  where
    F: FnOnce(R) -> T,
  {
    match self {
      Left(l) => Left(l),
      Right(r) => Right(f(r)),
    }
  }

  pub fn flip(self) -> Either<R, L> {
    match self {
      Left(l) => Right(l),
      Right(r) => Left(r),
    }
  }
}

impl<T> Either<T, T> {
  /// Returns whichever payload is live. Only available when both cases
  /// share a type, where the distinction is cosmetic.
  pub fn into_inner(self) -> T {
    match self {
      Left(l) => l,
      Right(r) => r,
    }
  }
}
