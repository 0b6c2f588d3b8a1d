mod client;

pub use client::ModuleClient;
