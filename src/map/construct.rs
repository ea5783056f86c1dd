//! Positional construction from tuples.

use crate::primitives::{HCons, HNil};
use super::slot::Slot;

/// Build a spec list from a tuple of values in declaration order.
pub trait FromValues<Values> {
    fn from_values(values: Values) -> Self;
}

impl FromValues<()> for HNil {
    fn from_values(_: ()) -> Self { HNil }
}

// Implement FromValues for tuples of arity 1..=8 (Unrolled)
macro_rules! impl_from_values {
    (@ty) => { HNil };
    (@ty $K:ident $V:ident $(, $Kt:ident $Vt:ident)*) => {
        HCons<Slot<$K, $V>, impl_from_values!(@ty $($Kt $Vt),*)>
    };
    (@val) => { HNil };
    (@val $v:ident $(, $vt:ident)*) => {
        HCons::new(Slot::new($v), impl_from_values!(@val $($vt),*))
    };
    ($($K:ident $V:ident $v:ident),+) => {
        impl<$($K, $V),+> FromValues<($($V,)+)> for impl_from_values!(@ty $($K $V),+) {
            fn from_values(($($v,)+): ($($V,)+)) -> Self {
                impl_from_values!(@val $($v),+)
            }
        }
    };
}

impl_from_values!(K0 V0 v0);
impl_from_values!(K0 V0 v0, K1 V1 v1);
impl_from_values!(K0 V0 v0, K1 V1 v1, K2 V2 v2);
impl_from_values!(K0 V0 v0, K1 V1 v1, K2 V2 v2, K3 V3 v3);
impl_from_values!(K0 V0 v0, K1 V1 v1, K2 V2 v2, K3 V3 v3, K4 V4 v4);
impl_from_values!(K0 V0 v0, K1 V1 v1, K2 V2 v2, K3 V3 v3, K4 V4 v4, K5 V5 v5);
impl_from_values!(K0 V0 v0, K1 V1 v1, K2 V2 v2, K3 V3 v3, K4 V4 v4, K5 V5 v5, K6 V6 v6);
impl_from_values!(K0 V0 v0, K1 V1 v1, K2 V2 v2, K3 V3 v3, K4 V4 v4, K5 V5 v5, K6 V6 v6, K7 V7 v7);
