//! Firm-power dispatch simulator and BESS sizing sweep.
//!
//! Simulates hour-by-hour three-tier dispatch (FIRM / SUPPLEMENTAL /
//! SHUTDOWN) of a hydro + PV + wind + battery system over an 8760-hour
//! year, and sweeps candidate battery capacities to produce sizing KPIs.

pub mod config;
pub mod io;
pub mod profiles;
pub mod sim;
