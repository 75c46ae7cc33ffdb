//! Emptiness checks for strings and collections.
//!
//! [`MaybeEmpty`] lets a single guard accept any string or collection type
//! while still reporting the right default message. Every implementation
//! answers in constant time from the value's own length bookkeeping; nothing
//! is iterated.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{CStr, CString, OsStr, OsString};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

/// What a value holds, which selects the default guard message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Text: `str`, `String`, `OsStr`, `Path`, ...
    String,
    /// A container of elements: slices, `Vec`, maps, sets, ...
    Collection,
}

impl Shape {
    pub(crate) const fn noun(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Collection => "collection",
        }
    }
}

/// A value that can be empty.
///
/// # Examples
///
/// ```rust
/// use param_guard::{MaybeEmpty, Shape};
///
/// struct Batch(Vec<u8>);
///
/// impl MaybeEmpty for Batch {
///     const SHAPE: Shape = Shape::Collection;
///
///     fn is_empty(&self) -> bool {
///         self.0.is_empty()
///     }
/// }
///
/// assert!(MaybeEmpty::is_empty(&Batch(Vec::new())));
/// ```
pub trait MaybeEmpty {
    /// Whether this is text or a collection.
    const SHAPE: Shape;

    /// Returns `true` if the value holds nothing.
    fn is_empty(&self) -> bool;
}

// ============================================================================
// STRINGS
// ============================================================================

macro_rules! impl_string {
    ($($ty:ty => |$v:ident| $check:expr),+ $(,)?) => {
        $(
            impl MaybeEmpty for $ty {
                const SHAPE: Shape = Shape::String;

                #[inline]
                fn is_empty(&self) -> bool {
                    let $v = self;
                    $check
                }
            }
        )+
    };
}

impl_string! {
    str => |s| str::is_empty(s),
    String => |s| String::is_empty(s),
    OsStr => |s| OsStr::is_empty(s),
    OsString => |s| OsStr::is_empty(s),
    Path => |p| OsStr::is_empty(p.as_os_str()),
    PathBuf => |p| OsStr::is_empty(p.as_os_str()),
    CStr => |s| CStr::is_empty(s),
    CString => |s| CStr::is_empty(s),
}

impl MaybeEmpty for Cow<'_, str> {
    const SHAPE: Shape = Shape::String;

    #[inline]
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

// ============================================================================
// COLLECTIONS
// ============================================================================

impl<T> MaybeEmpty for [T] {
    const SHAPE: Shape = Shape::Collection;

    #[inline]
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T, const N: usize> MaybeEmpty for [T; N] {
    const SHAPE: Shape = Shape::Collection;

    #[inline]
    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T: Clone> MaybeEmpty for Cow<'_, [T]> {
    const SHAPE: Shape = Shape::Collection;

    #[inline]
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

macro_rules! impl_collection {
    ($([$($gen:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen)*> MaybeEmpty for $ty {
                const SHAPE: Shape = Shape::Collection;

                #[inline]
                fn is_empty(&self) -> bool {
                    <$ty>::is_empty(self)
                }
            }
        )+
    };
}

impl_collection! {
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [T] BTreeSet<T>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [K, V, S] HashMap<K, V, S>,
}

// ============================================================================
// POINTERS
// ============================================================================

macro_rules! impl_forward {
    ($($ptr:ident),+ $(,)?) => {
        $(
            impl<T: MaybeEmpty + ?Sized> MaybeEmpty for $ptr<T> {
                const SHAPE: Shape = T::SHAPE;

                #[inline]
                fn is_empty(&self) -> bool {
                    T::is_empty(self)
                }
            }
        )+
    };
}

impl_forward!(Box, Rc, Arc);

impl<T: MaybeEmpty + ?Sized> MaybeEmpty for &T {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn is_empty(&self) -> bool {
        T::is_empty(self)
    }
}
