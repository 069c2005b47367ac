mod character;
mod solar_system;
