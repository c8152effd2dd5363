mod common;
mod probe_reachability;
