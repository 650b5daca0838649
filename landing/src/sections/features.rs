use super::BRAND;
use leptos::prelude::*;

/// One card of the "Why Choose" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The feature grid, in display order.
pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "⚡",
        title: "Fast VMs",
        description: "Launch instances in seconds with SSD storage and high-performance CPUs.",
    },
    Feature {
        icon: "🔒",
        title: "Secure",
        description: "Isolated projects, firewalls, and role-based access control for your safety.",
    },
    Feature {
        icon: "🌍",
        title: "Global",
        description: "Deploy in multiple regions with low-latency connectivity.",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    let heading = format!("Why Choose {}?", BRAND);
    view! {
        <section class="py-16 bg-gray-50">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="text-3xl font-bold text-center mb-12 text-gray-800">{heading}</h2>
                <div class="grid md:grid-cols-3 gap-10">
                    // Fixed tuple; a collected Vec leaves a `<!>` placeholder in static HTML.
                    <FeatureCard feature=FEATURES[0] />
                    <FeatureCard feature=FEATURES[1] />
                    <FeatureCard feature=FEATURES[2] />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    // Icon and title share one text node so the heading reads "⚡ Fast VMs".
    let title = format!("{} {}", feature.icon, feature.title);
    view! {
        <div class="text-center p-6 bg-white rounded-lg shadow">
            <h3 class="text-2xl font-bold text-blue-600 mb-4">{title}</h3>
            <p class="text-gray-600">{feature.description}</p>
        </div>
    }
}
