mod journey;
mod sim_time;
mod stats;
mod support;
