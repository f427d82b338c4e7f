pub mod header;
pub mod navigation;
pub mod sidebar;

use leptos::prelude::*;

use crate::domain;
use header::Header;
use navigation::{Navigation, Section};
use sidebar::Sidebar;

/// Main authenticated shell: sidebar, header, and the active section's view.
#[component]
pub fn Shell() -> impl IntoView {
    let nav = Navigation::expect();
    nav.init_url_sync();

    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-main">
                <Header/>
                <main class="app-content">
                    {move || match nav.active.get() {
                        Section::Products => {
                            view! { <domain::product::ui::ProductSection/> }.into_any()
                        }
                        Section::Categories => {
                            view! { <domain::category::ui::CategorySection/> }.into_any()
                        }
                        Section::Subcategories => {
                            view! { <domain::subcategory::ui::SubcategorySection/> }.into_any()
                        }
                        Section::Inquiries => {
                            view! { <domain::inquiry::ui::InquirySection/> }.into_any()
                        }
                        Section::Banners => {
                            view! { <domain::banner::ui::BannerSection/> }.into_any()
                        }
                        Section::Workshops => {
                            view! { <domain::workshop::ui::WorkshopSection/> }.into_any()
                        }
                        Section::Registrations => {
                            view! { <domain::registration::ui::RegistrationSection/> }.into_any()
                        }
                        Section::Reels => view! { <domain::reel::ui::ReelSection/> }.into_any(),
                        Section::Blogs => view! { <domain::blog::ui::BlogSection/> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
