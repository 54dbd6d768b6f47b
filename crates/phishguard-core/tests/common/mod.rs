pub mod html_server;
