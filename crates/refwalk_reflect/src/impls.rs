//! [`Reflect`] implementations for standard library types.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, mpsc};

use crate::{Channel, Map, Pointer, Reflect, ReflectRef, Scalar, Sequence};

macro_rules! impl_scalar {
    ($variant:ident as $repr:ty: $($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> ReflectRef<'_> {
                    ReflectRef::Scalar(Scalar::$variant(*self as $repr))
                }
            }
        )*
    };
}

impl_scalar!(Int as i128: i8, i16, i32, i64, i128, isize);
impl_scalar!(Uint as u128: u8, u16, u32, u64, u128, usize);
impl_scalar!(Float as f64: f32, f64);

impl Reflect for bool {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(Scalar::Bool(*self))
    }
}

impl Reflect for char {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(Scalar::Char(*self))
    }
}

impl Reflect for () {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(Scalar::Unit)
    }
}

impl Reflect for str {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(Scalar::Str(self))
    }
}

impl Reflect for String {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(Scalar::Str(self.as_str()))
    }
}

// References are transparent: they reflect as whatever they point at.
impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> ReflectRef<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    fn reflect(&self) -> ReflectRef<'_> {
        (**self).reflect()
    }
}

// Sequences

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Sequence(self)
    }
}

impl<T: Reflect> Sequence for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Sequence(self)
    }
}

impl<T: Reflect, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Sequence(self)
    }
}

impl<T: Reflect> Sequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(|v| v as &dyn Reflect)
    }
}

// Maps

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }
}

impl<K: Reflect, V: Reflect, S> Map for HashMap<K, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(
            self.iter()
                .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)),
        )
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }
}

impl<K: Reflect, V: Reflect> Map for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(
            self.iter()
                .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)),
        )
    }
}

// Pointers

macro_rules! impl_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $ptr<T> {
                fn reflect(&self) -> ReflectRef<'_> {
                    ReflectRef::Pointer(self)
                }
            }

            impl<T: Reflect> Pointer for $ptr<T> {
                fn target(&self) -> Option<&dyn Reflect> {
                    Some(&**self as &dyn Reflect)
                }
            }
        )*
    };
}

impl_pointer!(Box, Rc, Arc);

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }
}

impl<T: Reflect> Pointer for Option<T> {
    fn target(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|v| v as &dyn Reflect)
    }
}

// Channels

impl<T: Reflect + 'static> Reflect for crossbeam_channel::Receiver<T> {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Channel(self)
    }
}

impl<T: Reflect + 'static> Channel for crossbeam_channel::Receiver<T> {
    fn recv(&self) -> Option<Box<dyn Reflect>> {
        crossbeam_channel::Receiver::recv(self)
            .ok()
            .map(|v| Box::new(v) as Box<dyn Reflect>)
    }

    fn try_recv(&self) -> Option<Box<dyn Reflect>> {
        crossbeam_channel::Receiver::try_recv(self)
            .ok()
            .map(|v| Box::new(v) as Box<dyn Reflect>)
    }
}

impl<T: Reflect + 'static> Reflect for mpsc::Receiver<T> {
    fn reflect(&self) -> ReflectRef<'_> {
        ReflectRef::Channel(self)
    }
}

impl<T: Reflect + 'static> Channel for mpsc::Receiver<T> {
    fn recv(&self) -> Option<Box<dyn Reflect>> {
        mpsc::Receiver::recv(self)
            .ok()
            .map(|v| Box::new(v) as Box<dyn Reflect>)
    }

    fn try_recv(&self) -> Option<Box<dyn Reflect>> {
        mpsc::Receiver::try_recv(self)
            .ok()
            .map(|v| Box::new(v) as Box<dyn Reflect>)
    }
}
