use leptos::prelude::*;
use web_sys::window;

/// "Scan to open on mobile" panel.
///
/// The image comes from an external QR generator pointed at wherever the
/// app is currently served, so the link survives deploys to new hosts.
#[component]
pub fn QrCodePanel() -> impl IntoView {
    let qr_url = RwSignal::new(String::new());

    Effect::new(move |_| {
        let Some(href) = window().and_then(|w| w.location().href().ok()) else {
            return;
        };
        qr_url.set(format!(
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data={}",
            urlencoding::encode(&href)
        ));
    });

    view! {
        <div class="qr-panel">
            <h3 class="qr-panel__title">"Scan to Open in Mobile"</h3>
            <Show when=move || !qr_url.get().is_empty()>
                <img
                    class="qr-panel__image"
                    src=move || qr_url.get()
                    alt="QR Code"
                    width="150"
                    height="150"
                />
            </Show>
            <p class="qr-panel__hint">"Scan with your phone camera"</p>
        </div>
    }
}
