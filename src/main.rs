// Subscription Filter - Gmail subscription filter form
// Copyright (C) 2026  Asa V. Schaeffer
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod cli;
mod error;
mod form;
mod notify;
mod state;
mod theme;
mod ui;

fn main() -> eframe::Result<()> {
    let cli = cli::Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 760.0])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };

    let theme = cli.theme;
    eframe::run_native(
        "Gmail Subscription Filter",
        options,
        Box::new(move |cc| Ok(Box::new(app::SubscriptionFilterApp::new(cc, theme)))),
    )
}
