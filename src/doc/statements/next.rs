/*!
# `NEXT [<variable>]`

## Purpose
Closes the innermost `FOR` loop.

## Remarks
The variable name is optional and is not checked;
`NEXT` always belongs to the most recent open `FOR`.

## Example
```text
10 FOR X=1 TO 2
20 FOR Y=5 TO 6
30 PRINT X;Y
40 NEXT Y
50 NEXT X
RUN
1 5
1 6
2 5
2 6
```

*/
