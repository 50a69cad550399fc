mod forms;
mod properties;
mod subnet;
mod validity;
