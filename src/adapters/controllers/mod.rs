pub mod momento_controller;
