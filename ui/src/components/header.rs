use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icons;
use crate::nav::dropdown::DropdownController;
use crate::nav::links::{ABOUT_LINK, HOME_LINK, NavLink, SERVICE_LINKS, SERVICES_LINK, ServiceLink};
use crate::nav::mobile::MobileMenuController;
use crate::nav::scheduler::TimeoutScheduler;

const PHONE_NUMBER: &str = "402-555-0123";

const MOBILE_LINK_CLASS: &str =
    "text-foreground hover:text-primary transition-colors px-4 py-3 font-medium rounded-md hover:bg-primary/5";

#[component]
pub fn Header() -> impl IntoView {
    let dropdown = DropdownController::new(TimeoutScheduler);
    let mobile = MobileMenuController::new();

    // the hover close timer must not outlive the header
    on_cleanup(move || dropdown.cancel_pending_close());

    view! {
        <header class="bg-white text-foreground sticky top-0 z-50 shadow-sm border-b border-border">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16 lg:h-20">
                    <a href="/" class="flex items-center space-x-2 lg:space-x-3">
                        <img
                            src="/assets/img/logo.png"
                            alt="Omaha Auto Glass Repair"
                            class="h-8 w-auto lg:h-10"
                        />
                        <div class="hidden sm:block">
                            <h1 class="text-sm lg:text-lg font-bold text-foreground leading-tight">
                                "Omaha Auto Glass Repair"
                            </h1>
                        </div>
                    </a>

                    <nav class="hidden lg:flex items-center space-x-6 xl:space-x-8">
                        <DesktopNavLink link=HOME_LINK dropdown mobile/>
                        <DesktopNavLink link=ABOUT_LINK dropdown mobile/>
                        <ServicesDropdown dropdown mobile/>
                        <a
                            href="#contact"
                            class="text-foreground hover:text-primary transition-colors duration-200 font-medium border-b-2 border-transparent hover:border-primary pb-1"
                        >
                            "Contact"
                        </a>
                    </nav>

                    <div class="hidden lg:flex items-center space-x-3 xl:space-x-4">
                        <a
                            href=format!("tel:{PHONE_NUMBER}")
                            class="flex items-center space-x-2 text-foreground hover:text-primary transition-colors font-medium"
                        >
                            {icons::phone("h-4 w-4")}
                            <span class="font-semibold text-sm xl:text-base">{PHONE_NUMBER}</span>
                        </a>
                        <a
                            href="#contact"
                            class="bg-primary hover:bg-primary/90 text-primary-foreground px-4 xl:px-6 py-2 rounded-full font-medium text-sm"
                        >
                            "Get Quote"
                        </a>
                    </div>

                    <div class="flex items-center space-x-2 lg:hidden">
                        <a
                            href=format!("tel:{PHONE_NUMBER}")
                            class="hidden sm:flex items-center space-x-1 text-primary hover:text-primary/80 transition-colors"
                        >
                            {icons::phone("h-4 w-4")}
                            <span class="font-semibold text-sm">"Call"</span>
                        </a>
                        <button
                            class="p-2 rounded-md text-foreground hover:text-primary transition-colors"
                            aria-label="Toggle menu"
                            on:click=move |_| mobile.toggle()
                        >
                            <Show
                                when=move || mobile.is_open()
                                fallback=|| icons::menu("h-5 w-5")
                            >
                                {icons::close("h-5 w-5")}
                            </Show>
                        </button>
                    </div>
                </div>

                <Show when=move || mobile.is_open()>
                    <MobilePanel dropdown mobile/>
                </Show>
            </div>
        </header>
    }
}

#[component]
fn DesktopNavLink(
    link: NavLink,
    dropdown: DropdownController<TimeoutScheduler>,
    mobile: MobileMenuController,
) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <a
            href=link.path
            class="text-foreground hover:text-primary transition-colors duration-200 font-medium border-b-2 border-transparent hover:border-primary pb-1"
            class=("text-primary", move || link.is_active(&pathname.get()))
            on:click=move |_| {
                dropdown.link_selected();
                mobile.link_selected();
            }
        >
            {link.label}
        </a>
    }
}

#[component]
fn ServicesDropdown(
    dropdown: DropdownController<TimeoutScheduler>,
    mobile: MobileMenuController,
) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div
            class="relative"
            on:mouseenter=move |_| dropdown.pointer_enter()
            on:mouseleave=move |_| dropdown.pointer_leave()
            on:click=move |_| dropdown.click_toggle()
        >
            <button
                class="flex items-center space-x-1 text-foreground hover:text-primary transition-colors duration-200 font-medium border-b-2 border-transparent hover:border-primary pb-1"
                class=("text-primary", move || SERVICES_LINK.is_active(&pathname.get()))
            >
                <span>{SERVICES_LINK.label}</span>
                {icons::chevron_down("h-4 w-4")}
            </button>
            {move || {
                dropdown.is_open().then(|| view! {
                    // entering the panel counts as still inside the hover
                    // region, so it re-arms cancellation like the trigger
                    <div
                        class="absolute top-full left-0 mt-2 bg-background border border-border shadow-lg rounded-lg p-3 min-w-[280px] z-50 pb-6"
                        on:mouseenter=move |_| dropdown.pointer_enter()
                        on:mouseleave=move |_| dropdown.pointer_leave()
                    >
                        {SERVICE_LINKS
                            .iter()
                            .map(|service| view! { <ServiceItem service=*service dropdown mobile/> })
                            .collect_view()}
                    </div>
                })
            }}
        </div>
    }
}

#[component]
fn ServiceItem(
    service: ServiceLink,
    dropdown: DropdownController<TimeoutScheduler>,
    mobile: MobileMenuController,
) -> impl IntoView {
    view! {
        <a
            href=service.path
            class="block p-4 rounded-md hover:bg-primary/5 transition-colors"
            on:click=move |ev: MouseEvent| {
                // the wrapper's click toggle would reopen the menu
                ev.stop_propagation();
                dropdown.link_selected();
                mobile.link_selected();
            }
        >
            <div class="flex items-center justify-between">
                <span class="font-semibold text-gray-800 text-sm">{service.label}</span>
                {service.badge.map(|badge| view! {
                    <span class="bg-primary/10 text-primary text-xs ml-2 px-2 py-0.5 rounded-full">
                        {badge}
                    </span>
                })}
            </div>
        </a>
    }
}

#[component]
fn MobilePanel(
    dropdown: DropdownController<TimeoutScheduler>,
    mobile: MobileMenuController,
) -> impl IntoView {
    let select = move |_: MouseEvent| {
        dropdown.link_selected();
        mobile.link_selected();
    };

    view! {
        <div class="lg:hidden py-4 border-t border-border bg-white absolute top-full left-0 right-0 shadow-lg">
            <nav class="flex flex-col space-y-2">
                {[HOME_LINK, ABOUT_LINK]
                    .into_iter()
                    .map(|link| view! {
                        <a href=link.path class=MOBILE_LINK_CLASS on:click=select>
                            {link.label}
                        </a>
                    })
                    .collect_view()}
                {SERVICE_LINKS
                    .iter()
                    .map(|service| view! {
                        <a href=service.path class=MOBILE_LINK_CLASS on:click=select>
                            {service.label}
                        </a>
                    })
                    .collect_view()}
                <a href="#contact" class=MOBILE_LINK_CLASS on:click=select>
                    "Contact"
                </a>
                <div class="pt-3 border-t border-border mx-4">
                    <a
                        href=format!("tel:{PHONE_NUMBER}")
                        class="flex items-center space-x-2 text-foreground hover:text-primary mb-3 font-medium"
                    >
                        {icons::phone("h-4 w-4")}
                        <span class="font-semibold">{PHONE_NUMBER}</span>
                    </a>
                    <a
                        href="#contact"
                        class="block w-full text-center bg-primary hover:bg-primary/90 text-primary-foreground py-2 rounded-full font-medium"
                        on:click=select
                    >
                        "Get Quote"
                    </a>
                </div>
            </nav>
        </div>
    }
}
