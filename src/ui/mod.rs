//! UI module - reusable widgets for the shell and views

pub mod components;
