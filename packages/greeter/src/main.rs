use dioxus::prelude::*;
use greeter::GreetForm;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(app);
}

fn app() -> Element {
    rsx! {
        document::Title { "Greeter" }
        document::Stylesheet { href: MAIN_CSS }
        main { GreetForm {} }
    }
}
