use leptos::prelude::*;

use crate::components::icons;

struct Stat {
    number: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { number: "500+", label: "Happy Customers" },
    Stat { number: "5+", label: "Years Experience" },
    Stat { number: "24/7", label: "Emergency Service" },
    Stat { number: "50+", label: "Mile Service Radius" },
];

const CERTIFICATIONS: &[&str] = &[
    "Auto Glass Safety Council Certified",
    "Insurance Approved Contractor",
    "Nebraska State Licensed",
    "OSHA Safety Compliant",
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="py-20 bg-muted/30">
            <div class="container mx-auto px-4 max-w-6xl">
                <div class="text-center mb-16">
                    <h1 class="text-3xl md:text-4xl font-bold text-foreground mb-4">
                        "About Omaha Auto Glass Repair"
                    </h1>
                    <p class="text-lg text-muted-foreground max-w-3xl mx-auto">
                        "Your trusted local auto glass experts, committed to providing \
                         exceptional service and quality repairs throughout the Omaha area."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center mb-16">
                    <div>
                        <span class="inline-block bg-primary/10 text-primary text-sm px-3 py-1 rounded-full mb-4">
                            "Locally Owned & Operated"
                        </span>
                        <h2 class="text-2xl md:text-3xl font-bold text-foreground mb-4">
                            "Professional Auto Glass Services You Can Trust"
                        </h2>
                        <p class="text-muted-foreground mb-6 leading-relaxed">
                            "Your vehicle's glass is crucial for your safety and visibility. \
                             We provide the highest quality repairs and replacements using \
                             only premium materials and proven techniques."
                        </p>
                        <p class="text-muted-foreground mb-6 leading-relaxed">
                            "Our certified technicians bring years of experience to every \
                             job, and we stand behind every service with a comprehensive \
                             warranty."
                        </p>

                        <div class="mb-8">
                            <h3 class="text-lg font-semibold text-foreground mb-4">
                                "Certifications & Credentials"
                            </h3>
                            <div class="space-y-2">
                                <For
                                    each=move || CERTIFICATIONS.iter()
                                    key=|cert| **cert
                                    children=|cert| view! {
                                        <div class="flex items-center space-x-2">
                                            {icons::check("h-4 w-4 text-primary flex-shrink-0")}
                                            <span class="text-muted-foreground text-sm">{*cert}</span>
                                        </div>
                                    }
                                />
                            </div>
                        </div>

                        <a
                            href="tel:402-555-0123"
                            class="inline-flex items-center space-x-2 bg-primary hover:bg-primary/90 text-primary-foreground px-6 py-3 rounded-full font-medium"
                        >
                            {icons::phone("h-4 w-4")}
                            <span>"Call Us Today"</span>
                        </a>
                    </div>

                    <div class="grid grid-cols-2 gap-6">
                        <For
                            each=move || STATS.iter()
                            key=|stat| stat.label
                            children=|stat| view! {
                                <div class="text-center p-6 bg-white rounded-xl border border-border hover:shadow-lg transition-shadow">
                                    <div class="text-2xl font-bold text-foreground mb-1">{stat.number}</div>
                                    <div class="text-sm text-muted-foreground">{stat.label}</div>
                                </div>
                            }
                        />
                    </div>
                </div>

                <div class="text-center">
                    <h2 class="text-2xl font-bold text-foreground mb-4">"Ready to Get Started?"</h2>
                    <p class="text-muted-foreground mb-6 max-w-2xl mx-auto">
                        "Contact us today for a free quote on your auto glass repair or \
                         replacement needs. We're here to help get you back on the road safely."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href="#contact"
                            class="bg-primary hover:bg-primary/90 text-primary-foreground px-8 py-4 rounded-full font-medium"
                        >
                            "Get Free Quote"
                        </a>
                        <a
                            href="tel:402-555-0123"
                            class="inline-flex items-center justify-center space-x-2 px-8 py-4 rounded-full border border-border hover:bg-white font-medium"
                        >
                            {icons::phone("h-4 w-4")}
                            <span>"402-555-0123"</span>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
