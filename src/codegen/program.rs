//! Fixed Elm source surrounding the generated declarations.
//!
//! Targets Elm 0.18 (`Html.program`, `toString`), the version
//! `elm-interface-to-json` reads interfaces from.

/// Modules the generated program always imports.
pub const BASE_IMPORTS: &[&str] = &["Dict", "Html", "Html.Attributes", "Html.Events", "Json.Decode"];

/// Renders `a -> Html.Html msg` values with `toString`.
pub const VIEW_AS_TEXT: &str = r#"viewAsText : a -> Html.Html msg
viewAsText value =
    Html.text (toString value)"#;

/// Model, update, view and `main` of the interactive debugger.
///
/// Relies on `decodersByName`, `pairedViews`, `knownViews`, `viewDecoded` and
/// `summarizeDecoded` being defined alongside it.
pub const PROGRAM: &str = r#"type Msg
    = ChangeJson String
    | SaveChange
    | SetCurrentResult String
    | IgnoreViewMsg


type alias Model =
    { json : String
    , tempJson : String
    , knownDecoders : Dict.Dict String (Json.Decode.Decoder DecodedValue)
    , visibleResult : Maybe String
    }


runDecoder : Json.Decode.Decoder DecodedValue -> String -> Result String DecodedValue
runDecoder =
    Json.Decode.decodeString


isOk : Result e a -> Bool
isOk result =
    case result of
        Ok _ ->
            True

        Err _ ->
            False


viewHowManyRan : Model -> Int -> Html.Html Msg
viewHowManyRan model amount =
    "Ran "
        ++ toString (Dict.size model.knownDecoders)
        ++ " decoders, "
        ++ toString amount
        ++ " succeeded. "
        ++ toString (List.length knownViews)
        ++ " views are known."
        |> Html.text


viewSimpleResult : String -> Result String DecodedValue -> Html.Html Msg
viewSimpleResult decoderName result =
    let
        color =
            if isOk result then
                "green"
            else
                "red"
    in
        Html.div
            [ Html.Events.onClick (SetCurrentResult decoderName) ]
            [ Html.text decoderName
            , Html.div
                [ Html.Attributes.style [ ( "width", "50px" ), ( "height", "50px" ), ( "background-color", color ) ] ]
                []
            ]


viewInputJson : Model -> Html.Html Msg
viewInputJson model =
    Html.div
        []
        [ Html.textarea
            [ Html.Attributes.style [ ( "width", "500px" ), ( "height", "500px" ) ]
            , Html.Events.onInput ChangeJson
            , Html.Attributes.value model.tempJson
            ]
            []
        , Html.button [ Html.Events.onClick SaveChange ] [ Html.text "Test" ]
        ]


viewSelectedResult : Model -> Html.Html Msg
viewSelectedResult model =
    case model.visibleResult of
        Nothing ->
            Html.text ""

        Just decoderName ->
            let
                renderedWith =
                    Dict.get decoderName pairedViews
                        |> Maybe.withDefault "viewAsText"
            in
                Html.div
                    []
                    [ Html.span [] [ Html.text ("The decoder known as " ++ decoderName ++ " produced the following value:") ]
                    , case Dict.get decoderName model.knownDecoders of
                        Just foundDecoder ->
                            case runDecoder foundDecoder model.json of
                                Ok decoded ->
                                    Html.div
                                        []
                                        [ Html.p [] [ Html.text (summarizeDecoded decoded) ]
                                        , Html.p [] [ Html.text ("Rendered with " ++ renderedWith ++ ":") ]
                                        , viewDecoded decoded
                                        ]

                                Err error ->
                                    Html.p [] [ Html.text error ]

                        Nothing ->
                            Html.text ""
                    ]


view : Model -> Html.Html Msg
view model =
    let
        decoderResults =
            Dict.toList model.knownDecoders
                |> List.map (\( name, decoder ) -> ( name, runDecoder decoder model.json ))

        sortedBySuccess =
            List.sortBy
                (\( _, result ) ->
                    if isOk result then
                        0
                    else
                        1
                )
                decoderResults

        successfulRuns =
            List.filter (\( _, result ) -> isOk result) decoderResults
                |> List.length
    in
        Html.div
            []
            [ Html.div [] [ viewInputJson model, viewHowManyRan model successfulRuns, viewSelectedResult model ]
            , Html.div [] (List.map (\( name, result ) -> viewSimpleResult name result) sortedBySuccess)
            ]


update : Msg -> Model -> ( Model, Cmd Msg )
update msg model =
    case msg of
        SaveChange ->
            ( { model | json = model.tempJson }, Cmd.none )

        ChangeJson newJson ->
            ( { model | tempJson = newJson, visibleResult = Nothing }, Cmd.none )

        SetCurrentResult decoderName ->
            ( { model | visibleResult = Just decoderName }, Cmd.none )

        IgnoreViewMsg ->
            ( model, Cmd.none )


main : Program Never Model Msg
main =
    Html.program
        { init = ( { json = "", tempJson = "", knownDecoders = decodersByName, visibleResult = Nothing }, Cmd.none )
        , update = update
        , view = view
        , subscriptions = \_ -> Sub.none
        }"#;
