// Application layer: wires CLI commands to the SDK handlers.

pub mod commands;
