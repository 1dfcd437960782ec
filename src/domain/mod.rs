// Domain layer: the Point/City/Country model. All invariants (clamping,
// capacity, no aliasing) live here; fallible operations report through
// bool/Option returns, never errors.

pub mod city;
pub mod country;
pub mod point;
