use leptos::prelude::*;

use crate::components::icons;

/// Lives in the app shell rather than on a single page so the header's
/// "#contact" anchor resolves from every route.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 bg-primary text-primary-foreground">
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">"Get Your Free Quote Today"</h2>
                <p class="text-lg opacity-90 max-w-2xl mx-auto mb-8">
                    "Cracked windshield? Rock chip? Call or stop by — most repairs are done \
                     in under an hour, and we work with every major insurance company."
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-12">
                    <a
                        href="tel:402-555-0123"
                        class="flex items-center space-x-2 bg-white text-primary px-8 py-4 rounded-full font-semibold hover:bg-white/90 transition-colors"
                    >
                        {icons::phone("h-5 w-5")}
                        <span>"402-555-0123"</span>
                    </a>
                    <a
                        href="/about"
                        class="px-8 py-4 rounded-full border border-white/60 hover:bg-white/10 font-medium"
                    >
                        "Why Choose Us"
                    </a>
                </div>

                <div class="grid sm:grid-cols-3 gap-8 max-w-3xl mx-auto text-sm">
                    <div>
                        <h3 class="font-semibold mb-1">"Hours"</h3>
                        <p class="opacity-90">"Mon–Sat: 7am–7pm"</p>
                        <p class="opacity-90">"24/7 emergency service"</p>
                    </div>
                    <div>
                        <h3 class="font-semibold mb-1">"Service Area"</h3>
                        <p class="opacity-90">"Omaha and surrounding"</p>
                        <p class="opacity-90">"communities within 50 miles"</p>
                    </div>
                    <div>
                        <h3 class="font-semibold mb-1">"Mobile Service"</h3>
                        <p class="opacity-90">"We come to your home,"</p>
                        <p class="opacity-90">"office, or lot at no charge"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
