pub mod security_config;
