//! Static type reflection.
//!
//! [`Describe`] maps a Rust type to its [`TypeDescriptor`]. Implementations
//! are provided for primitives, indirections, sequences, maps, `mpsc`
//! channel ends, function pointers and the common std error types.
//! User-defined types get one through `#[derive(Describe)]`.
//!
//! [`Inspect`] is the object-safe counterpart, so values of different
//! types can be described through `&dyn Inspect`.

use std::any::type_name;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};

use crate::descriptor::{ChanDir, TypeDescriptor};

/// Types that know their own shape.
///
/// # Examples
/// ```
/// use whatis_core::{Describe, TypeDescriptor};
///
/// struct Celsius(f64);
///
/// impl Describe for Celsius {
///     fn type_descriptor() -> TypeDescriptor {
///         TypeDescriptor::named("weather", "Celsius")
///     }
/// }
///
/// assert_eq!(whatis_core::describe_type::<Vec<Celsius>>(), "[]weather.Celsius");
/// ```
pub trait Describe {
    fn type_descriptor() -> TypeDescriptor;
}

/// Object-safe access to a value's descriptor.
pub trait Inspect {
    fn descriptor(&self) -> TypeDescriptor;
}

impl<T: Describe + ?Sized> Inspect for T {
    #[inline]
    fn descriptor(&self) -> TypeDescriptor {
        T::type_descriptor()
    }
}

/// The results of a function returning `Self`.
///
/// `()` yields no results, tuples yield one result per element and any
/// other described type yields exactly one.
pub trait Results {
    fn result_descriptors() -> Vec<TypeDescriptor>;
}

impl Results for () {
    fn result_descriptors() -> Vec<TypeDescriptor> {
        Vec::new()
    }
}

impl<T: Describe> Results for T {
    fn result_descriptors() -> Vec<TypeDescriptor> {
        vec![T::type_descriptor()]
    }
}

macro_rules! impl_results_tuple {
    ($($elem:ident),+) => {
        impl<$($elem: Describe),+> Results for ($($elem,)+) {
            fn result_descriptors() -> Vec<TypeDescriptor> {
                vec![$(<$elem as Describe>::type_descriptor()),+]
            }
        }
    };
}

impl_results_tuple!(A, B);
impl_results_tuple!(A, B, C);
impl_results_tuple!(A, B, C, D);

// ── Primitives ──

macro_rules! impl_describe_primitive {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::primitive($name)
                }
            }
        )+
    };
}

impl_describe_primitive!(
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    str => "str",
    String => "string",
);

// ── Indirections ──

macro_rules! impl_describe_pointer {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<T: Describe + ?Sized> Describe for $ptr {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::pointer(T::type_descriptor())
                }
            }
        )+
    };
}

impl_describe_pointer!(Box<T>, Rc<T>, Arc<T>, *const T, *mut T);

impl<T: Describe + ?Sized> Describe for &T {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::pointer(T::type_descriptor())
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::pointer(T::type_descriptor())
    }
}

// ── Sequences ──

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::array(N, T::type_descriptor())
    }
}

impl<T: Describe> Describe for [T] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence(T::type_descriptor())
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence(T::type_descriptor())
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence(T::type_descriptor())
    }
}

// ── Maps ──

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::map(K::type_descriptor(), V::type_descriptor())
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::map(K::type_descriptor(), V::type_descriptor())
    }
}

// ── Channels ──

impl<T: Describe> Describe for Sender<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::chan(ChanDir::Send, T::type_descriptor())
    }
}

impl<T: Describe> Describe for SyncSender<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::chan(ChanDir::Send, T::type_descriptor())
    }
}

impl<T: Describe> Describe for Receiver<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::chan(ChanDir::Recv, T::type_descriptor())
    }
}

// ── Function pointers ──

macro_rules! impl_describe_fn {
    ($($param:ident),*) => {
        impl<Ret: Results, $($param: Describe),*> Describe for fn($($param),*) -> Ret {
            fn type_descriptor() -> TypeDescriptor {
                TypeDescriptor::function(
                    vec![$(<$param as Describe>::type_descriptor()),*],
                    Ret::result_descriptors(),
                )
            }
        }
    };
}

impl_describe_fn!();
impl_describe_fn!(A);
impl_describe_fn!(A, B);
impl_describe_fn!(A, B, C);
impl_describe_fn!(A, B, C, D);
impl_describe_fn!(A, B, C, D, E);
impl_describe_fn!(A, B, C, D, E, F);

// ── Named std types ──

macro_rules! impl_describe_by_path {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::from_type_path(type_name::<$ty>())
                }
            }
        )+
    };
}

impl_describe_by_path!(
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::str::ParseBoolError,
    std::char::ParseCharError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
);
