// Terminal dashboard: fetches the statistics and experience endpoints and renders them as text.

pub mod client;
pub mod render;

pub use client::{DashboardClient, DashboardData};
pub use render::{format_currency, render_dashboard};
