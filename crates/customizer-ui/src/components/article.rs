use yew::prelude::*;

const PARAGRAPHS: &[&str] = &[
    "Лето в Западной Швейцарии начинается рано: к середине мая склоны над Женевским озером \
     уже покрыты виноградниками, а в деревнях Лаво открываются первые дегустационные погреба.",
    "Отсюда легко добраться до Монтрё и Веве, пройти по набережной до Шильонского замка и \
     вернуться поездом, глядя на горы Савойи по ту сторону воды.",
    "Местные жители говорят по-французски, но охотно переходят на немецкий или английский, \
     если видят растерянного путешественника с картой в руках.",
];

#[function_component(Article)]
pub(crate) fn article() -> Html {
    html! {
        <article class="article">
            <h1 class="article__title">{"Портрет Западной Швейцарии"}</h1>
            <p class="article__subtitle">{"Примечание переводчика"}</p>
            {for PARAGRAPHS.iter().map(|text| html! { <p class="article__text">{*text}</p> })}
        </article>
    }
}
