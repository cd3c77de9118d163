pub mod status_channel;
