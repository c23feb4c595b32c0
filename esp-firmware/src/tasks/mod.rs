// Task-Modul: Enthält alle Embassy Tasks
//
// Die gesamte Arbeit läuft in einem einzigen Task: dem seriellen
// Kommando-Loop. Keine Channels, kein geteilter Zustand.

pub mod serial;

// Re-export Tasks für einfachen Import
pub use serial::serial_task;
