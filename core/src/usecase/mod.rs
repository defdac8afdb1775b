pub mod roster_view;
