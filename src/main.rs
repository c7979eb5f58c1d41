fn main() {
    dioxus::launch(portfolio_fx::site::App);
}
