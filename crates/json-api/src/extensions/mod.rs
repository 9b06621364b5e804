//! Extension traits

mod depot;
mod result;
mod shipping_tier;

pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
pub(crate) use shipping_tier::ShippingTierExt as _;
