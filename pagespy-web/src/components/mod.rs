pub mod rail_nav;
