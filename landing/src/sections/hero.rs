use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="pt-28 pb-20 text-center bg-gradient-to-br from-blue-900 via-blue-800 to-indigo-900 text-white">
            <div class="max-w-4xl mx-auto px-6">
                <h1 class="text-4xl md:text-6xl font-extrabold mb-6">
                    "Build Your Cloud"
                    <span class="text-blue-300">" Faster"</span>
                </h1>
                <p class="text-xl mb-10 text-blue-100">
                    "Launch VMs, manage networks, and scale your infrastructure on our OpenStack-powered cloud platform — simple, fast, and secure."
                </p>
                <div class="space-x-4">
                    <button
                        type="button"
                        class="bg-white text-blue-900 hover:bg-gray-200 px-8 py-3 rounded-full text-lg font-semibold transition"
                    >
                        "Get Started Free"
                    </button>
                    <button
                        type="button"
                        class="border-2 border-white text-white hover:bg-white hover:text-blue-900 px-8 py-3 rounded-full text-lg font-semibold transition"
                    >
                        "Learn More"
                    </button>
                </div>
            </div>
        </section>
    }
}
