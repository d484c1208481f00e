use leptos::prelude::*;

use crate::components::icons;

#[component]
pub fn RockChipRepair() -> impl IntoView {
    view! {
        <ServicePage
            title="Rock Chip Repair Service"
            lead="Most chips can be repaired in under 30 minutes, restoring the \
                  structural integrity of your windshield before the damage spreads."
            points=&[
                "Repairs chips up to the size of a quarter",
                "Prevents cracks from spreading across the glass",
                "Approved by every major insurance company",
                "Mobile service at your home or office",
            ]
        >
            <p class="text-muted-foreground leading-relaxed">
                "A small rock chip becomes a long crack with one cold morning or one \
                 pothole. Our resin injection process fills the break, cures it with \
                 UV light, and polishes it flush — typically invisible from a few \
                 feet away, and strong enough to stop the damage for good."
            </p>
        </ServicePage>
    }
}

#[component]
pub fn DealershipServices() -> impl IntoView {
    view! {
        <ServicePage
            title="Dealership Lot Services"
            lead="Scheduled on-lot chip repair and glass inspection that keeps your \
                  inventory front-line ready."
            points=&[
                "Weekly or on-call lot walks",
                "Per-vehicle repair reporting",
                "Volume pricing for dealer inventory",
                "Repairs completed without moving the vehicle",
            ]
        >
            <p class="text-muted-foreground leading-relaxed">
                "Lot cars collect chips. We walk your rows on a schedule, repair what \
                 we find, and leave you a line-item report, so every unit is ready \
                 for its test drive."
            </p>
        </ServicePage>
    }
}

#[component]
pub fn FleetServices() -> impl IntoView {
    view! {
        <ServicePage
            title="Commercial Fleet Services"
            lead="Keep your trucks and vans on the road with priority scheduling and \
                  consolidated billing for your whole fleet."
            points=&[
                "Priority same-day scheduling",
                "Service at your yard, on your hours",
                "Single monthly invoice across all vehicles",
                "DOT-compliant windshield standards",
            ]
        >
            <p class="text-muted-foreground leading-relaxed">
                "A van in the shop is a route uncovered. We come to your yard before \
                 the shift starts or after it ends, so glass damage never costs you \
                 a working day."
            </p>
        </ServicePage>
    }
}

#[component]
fn ServicePage(
    title: &'static str,
    lead: &'static str,
    points: &'static [&'static str],
    children: Children,
) -> impl IntoView {
    view! {
        <article class="py-20">
            <div class="container mx-auto px-4 max-w-4xl">
                <h1 class="text-3xl md:text-4xl font-bold text-foreground mb-4">{title}</h1>
                <p class="text-lg text-muted-foreground mb-8">{lead}</p>

                {children()}

                <ul class="my-8 space-y-3">
                    <For
                        each=move || points.iter()
                        key=|point| **point
                        children=|point| view! {
                            <li class="flex items-center space-x-2">
                                {icons::check("h-4 w-4 text-primary flex-shrink-0")}
                                <span class="text-foreground">{*point}</span>
                            </li>
                        }
                    />
                </ul>

                <div class="flex flex-col sm:flex-row gap-4">
                    <a
                        href="#contact"
                        class="bg-primary hover:bg-primary/90 text-primary-foreground px-8 py-4 rounded-full font-medium text-center"
                    >
                        "Get a Free Quote"
                    </a>
                    <a
                        href="tel:402-555-0123"
                        class="inline-flex items-center justify-center space-x-2 px-8 py-4 rounded-full border border-border hover:bg-muted/30 font-medium"
                    >
                        {icons::phone("h-4 w-4")}
                        <span>"402-555-0123"</span>
                    </a>
                </div>
            </div>
        </article>
    }
}
