pub mod config;

pub mod event {
    pub mod events;
}

pub mod http;

pub mod recommend {
    pub mod fetcher;
    pub mod state;
}

pub mod store {
    pub mod options;
}

pub mod ui {
    pub mod app;
    pub mod input;
    pub mod message;
    pub mod state;
    pub mod tui;

    pub mod components {
        pub mod app;
        pub mod button;
        pub mod recommendations;
        pub mod select;
        pub mod spinner;
    }

    pub mod util {
        pub mod handler;
    }
}

pub mod util {
    pub mod colors;
    pub mod hook;
    pub mod log;
    pub mod task;
}
