use servicios_adapter_leptos::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
