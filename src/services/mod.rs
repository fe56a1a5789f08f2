// Orlanda services
// Services back the shell with durable state; everything else is process-scoped.

pub mod settings_store;
