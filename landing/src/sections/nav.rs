use super::BRAND;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="bg-white shadow-md fixed w-full top-0 z-50">
            <div class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
                <h1 class="text-2xl font-bold text-blue-600">{BRAND}</h1>
                <button
                    type="button"
                    class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-2 rounded-full font-medium transition"
                >
                    "Sign In"
                </button>
            </div>
        </nav>
    }
}
