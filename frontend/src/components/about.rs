use yew::prelude::*;

use crate::parallax::{background_style, use_parallax_offset};

pub const SHOP_URL: &str = "https://stoneengneer.official.ec/";

#[function_component(About)]
pub fn about() -> Html {
    let offset = use_parallax_offset();

    html! {
        <div id="about" class="about" style={background_style(offset)}>
            <div class="about-text">
                <h2 class="about-title">{"ABOUT"}</h2>
                <div class="about-statement">
                    {"Stone.Engineer = 石器技術者"}<br /><br />
                    {"石器時代では欲しい物がある場合、自身で検討し（デザイン）、自身で制作する（施工）のが当たり前でした。"}<br /><br />
                    {"これこそモノづくりの原点だと考えます。"}<br /><br />
                    {"このブランドのEngineerたちは、建築業界やデザイン、ITなどの専門的な本職についており、その経験を活かしてより良いプロダクトを制作するために集結しました。"}<br /><br />
                    {"数百回の試行錯誤を経て、皆様により良い商品をご提供致します。"}<br /><br />
                </div>
            </div>
            <a href={SHOP_URL} class="about-shop">
                <div class="shop-text">{"Online Shop"}</div>
                <img class="shop-image" src="/evo.jpg" alt="shopImage" width="1280" height="1280" loading="lazy" />
            </a>
        </div>
    }
}
