//! Pointer reduction.

use crate::{Reflect, ReflectRef};

/// Follows pointers until a non-pointer value is reached.
///
/// Stops and returns the last pointer when it is null, or when it points at
/// itself: the target is a pointer of the same type at the same address.
/// A payload stored at offset zero (`Some(Box<T>)`) shares its container's
/// address but not its type, and is followed. Only that direct
/// self-reference is detected; cycles that pass through composite values
/// are not.
pub fn indirect(value: &dyn Reflect) -> &dyn Reflect {
    let mut current = value;

    loop {
        let ReflectRef::Pointer(pointer) = current.reflect() else {
            return current;
        };
        let Some(target) = pointer.target() else {
            return current;
        };
        if is_self_reference(current, target) {
            return current;
        }
        current = target;
    }
}

fn is_self_reference(pointer: &dyn Reflect, target: &dyn Reflect) -> bool {
    matches!(target.reflect(), ReflectRef::Pointer(_))
        && std::ptr::addr_eq(std::ptr::from_ref(target), std::ptr::from_ref(pointer))
        && target.type_name() == pointer.type_name()
}
