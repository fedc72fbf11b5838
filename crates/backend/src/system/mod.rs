pub mod site_settings;
