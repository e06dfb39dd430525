//! Configuration loaded from the process environment.

pub mod db;
