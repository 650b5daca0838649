use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 text-white py-8 text-center">
            <p>"© 2025 CloudLift. All rights reserved."</p>
        </footer>
    }
}
