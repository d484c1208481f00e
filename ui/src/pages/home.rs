use leptos::prelude::*;

use crate::components::icons;
use crate::nav::links::SERVICE_LINKS;

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    detail: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They came to my office and fixed the chip before lunch. You can't even tell where it was.",
        name: "Sarah M.",
        detail: "Rock chip repair",
    },
    Testimonial {
        quote: "Our dealership has used them for two years. Fast turnaround on every lot car, every time.",
        name: "Dave R.",
        detail: "Dealership services",
    },
    Testimonial {
        quote: "Insurance covered the whole repair and they handled the paperwork. Zero hassle.",
        name: "Jennifer K.",
        detail: "Insurance claim",
    },
];

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Hero/>
        <ServicesOverview/>
        <Testimonials/>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="py-24 bg-muted/30">
            <div class="container mx-auto px-4 max-w-4xl text-center">
                <h1 class="text-4xl md:text-6xl font-bold text-foreground mb-6 leading-tight">
                    "Omaha's Trusted"<br/>"Auto Glass Experts"
                </h1>
                <p class="text-lg text-muted-foreground max-w-2xl mx-auto mb-8">
                    "Rock chip repair and windshield service done right, the first time. \
                     Mobile service across the Omaha metro at no extra charge."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href="#contact"
                        class="inline-block bg-primary text-primary-foreground px-8 py-4 rounded-full font-medium hover:bg-primary/90 transition"
                    >
                        "Get a Free Quote"
                    </a>
                    <a
                        href="tel:402-555-0123"
                        class="inline-flex items-center justify-center space-x-2 px-8 py-4 rounded-full border border-border hover:bg-muted/50 font-medium"
                    >
                        {icons::phone("h-4 w-4")}
                        <span>"402-555-0123"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesOverview() -> impl IntoView {
    view! {
        <section class="py-16">
            <div class="container mx-auto px-4 max-w-5xl">
                <h2 class="text-3xl font-bold text-foreground text-center mb-10">"What We Do"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    <For
                        each=move || SERVICE_LINKS.iter()
                        key=|service| service.path
                        children=|service| view! {
                            <a
                                href=service.path
                                class="block p-6 rounded-xl border border-border hover:shadow-lg transition-shadow bg-white"
                            >
                                <h3 class="font-semibold text-lg text-foreground mb-2">{service.label}</h3>
                                <p class="text-sm text-muted-foreground">
                                    "Fast, certified workmanship backed by our lifetime warranty."
                                </p>
                            </a>
                        }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="py-16 bg-muted/30">
            <div class="container mx-auto px-4 max-w-5xl">
                <h2 class="text-3xl font-bold text-foreground text-center mb-10">
                    "What Our Customers Say"
                </h2>
                <div class="grid md:grid-cols-3 gap-6">
                    <For
                        each=move || TESTIMONIALS.iter()
                        key=|t| t.name
                        children=|t| view! {
                            <figure class="p-6 rounded-xl bg-white border border-border">
                                <blockquote class="text-sm text-muted-foreground mb-4">
                                    "\u{201c}" {t.quote} "\u{201d}"
                                </blockquote>
                                <figcaption class="text-sm">
                                    <span class="font-semibold text-foreground">{t.name}</span>
                                    <span class="text-muted-foreground">" — " {t.detail}</span>
                                </figcaption>
                            </figure>
                        }
                    />
                </div>
            </div>
        </section>
    }
}
